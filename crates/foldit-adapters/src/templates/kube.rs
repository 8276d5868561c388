//! Kubernetes manifests written under `k8s/`.

use foldit_core::domain::KubeOptions;

use crate::renderer::{Rendered, Vars};

const DEPLOYMENT: &str = "apiVersion: apps/v1
kind: Deployment
metadata:
  name: nextjs-app
  namespace: {{NAMESPACE}}
  labels:
    app: nextjs-app
spec:
  replicas: {{REPLICAS}}
  selector:
    matchLabels:
      app: nextjs-app
  template:
    metadata:
      labels:
        app: nextjs-app
    spec:
      containers:
      - name: nextjs-app
        image: {{IMAGE}}
        ports:
        - containerPort: {{PORT}}
        env:
        - name: NODE_ENV
          value: \"production\"
        - name: PORT
          value: \"{{PORT}}\"
        resources:
          requests:
            memory: \"128Mi\"
            cpu: \"100m\"
          limits:
            memory: \"512Mi\"
            cpu: \"500m\"
        livenessProbe:
          httpGet:
            path: /api/health
            port: {{PORT}}
          initialDelaySeconds: 30
          periodSeconds: 10
        readinessProbe:
          httpGet:
            path: /api/health
            port: {{PORT}}
          initialDelaySeconds: 5
          periodSeconds: 5
        securityContext:
          allowPrivilegeEscalation: false
          runAsNonRoot: true
          runAsUser: 1001
          capabilities:
            drop:
            - ALL
      securityContext:
        fsGroup: 1001
      imagePullSecrets:
      - name: regcred
";

const SERVICE: &str = "apiVersion: v1
kind: Service
metadata:
  name: nextjs-service
  namespace: {{NAMESPACE}}
  labels:
    app: nextjs-app
spec:
  type: {{SERVICE_TYPE}}
  ports:
  - port: {{PORT}}
    targetPort: {{PORT}}
    protocol: TCP
    name: http
  selector:
    app: nextjs-app
  sessionAffinity: None
";

const INGRESS: &str = "apiVersion: networking.k8s.io/v1
kind: Ingress
metadata:
  name: nextjs-ingress
  namespace: {{NAMESPACE}}
  annotations:
    kubernetes.io/ingress.class: \"nginx\"
    cert-manager.io/cluster-issuer: \"letsencrypt-prod\"
    nginx.ingress.kubernetes.io/ssl-redirect: \"true\"
    nginx.ingress.kubernetes.io/force-ssl-redirect: \"true\"
    nginx.ingress.kubernetes.io/proxy-body-size: \"50m\"
    nginx.ingress.kubernetes.io/proxy-read-timeout: \"300\"
    nginx.ingress.kubernetes.io/proxy-send-timeout: \"300\"
spec:
  tls:
  - hosts:
    - your-domain.com
    secretName: nextjs-tls
  rules:
  - host: your-domain.com
    http:
      paths:
      - path: /
        pathType: Prefix
        backend:
          service:
            name: nextjs-service
            port:
              number: {{PORT}}
      - path: /api
        pathType: Prefix
        backend:
          service:
            name: nextjs-service
            port:
              number: {{PORT}}
";

const CONFIG_MAP: &str = "apiVersion: v1
kind: ConfigMap
metadata:
  name: nextjs-config
  namespace: {{NAMESPACE}}
data:
  NODE_ENV: \"production\"
  NEXT_PUBLIC_API_URL: \"https://api.your-domain.com\"
  NEXT_PUBLIC_APP_URL: \"https://your-domain.com\"
  # Add your custom environment variables here
  # DATABASE_URL: \"your-database-url\"
  # REDIS_URL: \"your-redis-url\"
";

fn vars(options: &KubeOptions) -> Vars {
    Vars::new()
        .with("NAMESPACE", options.namespace.as_str())
        .with("REPLICAS", options.replicas.to_string())
        .with("PORT", options.port.to_string())
        .with("IMAGE", options.image())
        .with("SERVICE_TYPE", options.service_type.as_str())
}

pub fn deployment(options: &KubeOptions) -> Rendered {
    vars(options).render(DEPLOYMENT)
}

pub fn service(options: &KubeOptions) -> Rendered {
    vars(options).render(SERVICE)
}

pub fn ingress(options: &KubeOptions) -> Rendered {
    vars(options).render(INGRESS)
}

pub fn config_map(options: &KubeOptions) -> Rendered {
    vars(options).render(CONFIG_MAP)
}
