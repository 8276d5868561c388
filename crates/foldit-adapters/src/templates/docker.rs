//! Dockerfile, `.dockerignore` and compose bodies.

use foldit_core::domain::DockerOptions;

use crate::renderer::{Rendered, Vars};

const PRODUCTION_DOCKERFILE: &str = "# syntax=docker/dockerfile:1

FROM node:{{NODE_VERSION}} AS deps
RUN apk add --no-cache libc6-compat
WORKDIR /app
COPY package.json package-lock.json* yarn.lock* pnpm-lock.yaml* ./
RUN \\
  if [ -f yarn.lock ]; then yarn --frozen-lockfile; \\
  elif [ -f package-lock.json ]; then npm ci; \\
  elif [ -f pnpm-lock.yaml ]; then corepack enable pnpm && pnpm i --frozen-lockfile; \\
  else npm install; \\
  fi

FROM node:{{NODE_VERSION}} AS builder
WORKDIR /app
COPY --from=deps /app/node_modules ./node_modules
COPY . .
ENV NEXT_TELEMETRY_DISABLED=1
RUN npm run build

FROM node:{{NODE_VERSION}} AS runner
WORKDIR /app
ENV NODE_ENV=production
ENV NEXT_TELEMETRY_DISABLED=1

RUN addgroup --system --gid 1001 nodejs
RUN adduser --system --uid 1001 nextjs

COPY --from=builder /app/public ./public
COPY --from=builder --chown=nextjs:nodejs /app/.next/standalone ./
COPY --from=builder --chown=nextjs:nodejs /app/.next/static ./.next/static

USER nextjs

EXPOSE {{PORT}}
ENV PORT={{PORT}}
ENV HOSTNAME=\"0.0.0.0\"

CMD [\"node\", \"server.js\"]
";

const DEVELOPMENT_DOCKERFILE: &str = "FROM node:{{NODE_VERSION}}

WORKDIR /app

COPY package.json package-lock.json* yarn.lock* pnpm-lock.yaml* ./
RUN npm install

COPY . .

ENV NODE_ENV=development
ENV PORT={{PORT}}

EXPOSE {{PORT}}

CMD [\"npm\", \"run\", \"dev\"]
";

const DOCKERIGNORE: &str = "node_modules
npm-debug.log*
yarn-debug.log*
yarn-error.log*
.next
out
build
coverage
.git
.gitignore
.env*.local
.vercel
Dockerfile
.dockerignore
docker-compose.yml
README.md
";

const COMPOSE: &str = "version: '3.8'

services:
  nextjs:
    build:
      context: .
      dockerfile: Dockerfile
    ports:
      - \"{{PORT}}:{{PORT}}\"
    environment:
      - NODE_ENV={{NODE_ENV}}
      - PORT={{PORT}}
{{VOLUMES}}    restart: unless-stopped
    healthcheck:
      test: [\"CMD\", \"curl\", \"-f\", \"http://localhost:{{PORT}}/api/health\"]
      interval: 30s
      timeout: 10s
      retries: 3
      start_period: 40s
";

const DEV_VOLUMES: &str = "    volumes:
      - .:/app
      - /app/node_modules
      - /app/.next
";

pub fn dockerfile(options: &DockerOptions) -> Rendered {
    let template = if options.production {
        PRODUCTION_DOCKERFILE
    } else {
        DEVELOPMENT_DOCKERFILE
    };
    Vars::new()
        .with("NODE_VERSION", options.node_version.as_str())
        .with("PORT", options.port.to_string())
        .render(template)
}

pub fn dockerignore() -> String {
    DOCKERIGNORE.to_owned()
}

pub fn compose(options: &DockerOptions) -> Rendered {
    let (node_env, volumes) = if options.production {
        ("production", "")
    } else {
        ("development", DEV_VOLUMES)
    };
    Vars::new()
        .with("PORT", options.port.to_string())
        .with("NODE_ENV", node_env)
        .with("VOLUMES", volumes)
        .render(COMPOSE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_dockerfile_is_multi_stage() {
        let out = dockerfile(&DockerOptions {
            production: true,
            node_version: "20-alpine".into(),
            port: 8080,
            ..DockerOptions::default()
        }).unwrap();
        assert_eq!(out.matches("FROM node:20-alpine").count(), 3);
        assert!(out.contains(".next/standalone"));
        assert!(out.contains("EXPOSE 8080"));
    }

    #[test]
    fn development_dockerfile_runs_dev_server() {
        let out = dockerfile(&DockerOptions::default()).unwrap();
        assert!(out.starts_with("FROM node:18-alpine\n"));
        assert!(out.contains("CMD [\"npm\", \"run\", \"dev\"]"));
        assert!(out.contains("EXPOSE 3000"));
    }

    #[test]
    fn compose_environment_follows_mode() {
        let prod = compose(&DockerOptions {
            production: true,
            ..DockerOptions::default()
        }).unwrap();
        assert!(prod.contains("- NODE_ENV=production"));
        assert!(!prod.contains("volumes:"));

        let dev = compose(&DockerOptions::default()).unwrap();
        assert!(dev.contains("- NODE_ENV=development"));
        assert!(dev.contains("- /app/node_modules"));
        assert!(dev.contains("\"3000:3000\""));
    }
}
