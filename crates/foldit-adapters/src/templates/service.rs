//! API client service bodies (`src/services`).

use foldit_core::domain::{ServiceOptions, capitalize};

use crate::renderer::{Rendered, Vars};

const TYPES_IMPORT: &str = "
import {
  {{CAP}},
  Create{{CAP}}Request,
  Update{{CAP}}Request,
  {{CAP}}ListResponse,
  {{CAP}}Response,
  ApiError
} from './{{NAME}}Types';";

const CRUD: &str = "

export class {{CAP}}Service {
  private baseUrl = {{BASE_URL}};

  /**
   * Get all {{NAME}}s with pagination
   */
  async getAll(params?: { page?: number; limit?: number; search?: string }) {
    try {
      const response = await apiClient.get<{{LIST_TYPE}}>(this.baseUrl, { params });
      return response.data;
    } catch (error) {
      throw this.handleError(error);
    }
  }

  /**
   * Get a single {{NAME}} by ID
   */
  async getById(id: string) {
    try {
      const response = await apiClient.get<{{ITEM_TYPE}}>(`${this.baseUrl}/${id}`);
      return response.data;
    } catch (error) {
      throw this.handleError(error);
    }
  }

  /**
   * Create a new {{NAME}}
   */
  async create(data: {{CREATE_TYPE}}) {
    try {
      const response = await apiClient.post<{{ITEM_TYPE}}>(this.baseUrl, data);
      return response.data;
    } catch (error) {
      throw this.handleError(error);
    }
  }

  /**
   * Update an existing {{NAME}}
   */
  async update(id: string, data: {{UPDATE_TYPE}}) {
    try {
      const response = await apiClient.put<{{ITEM_TYPE}}>(`${this.baseUrl}/${id}`, data);
      return response.data;
    } catch (error) {
      throw this.handleError(error);
    }
  }

  /**
   * Delete a {{NAME}}
   */
  async delete(id: string) {
    try {
      const response = await apiClient.delete<{ message: string }>(`${this.baseUrl}/${id}`);
      return response.data;
    } catch (error) {
      throw this.handleError(error);
    }
  }";

const CACHE: &str = "

  /**
   * Get {{NAME}}s with caching
   */
  async getAllCached(params?: { page?: number; limit?: number; search?: string }) {
    const cacheKey = `{{NAME}}_list_${JSON.stringify(params)}`;
    const cached = sessionStorage.getItem(cacheKey);

    if (cached) {
      return JSON.parse(cached);
    }

    const data = await this.getAll(params);
    sessionStorage.setItem(cacheKey, JSON.stringify(data));
    return data;
  }

  /**
   * Clear {{NAME}} cache
   */
  clearCache() {
    Object.keys(sessionStorage).forEach((key) => {
      if (key.startsWith('{{NAME}}_')) {
        sessionStorage.removeItem(key);
      }
    });
  }";

const RETRY: &str = "

  /**
   * Retry wrapper with exponential backoff
   */
  private async retryRequest<T>(
    requestFn: () => Promise<T>,
    maxRetries: number = {{MAX_RETRIES}},
    delay: number = {{RETRY_DELAY}}
  ): Promise<T> {
    let lastError: any;

    for (let i = 0; i < maxRetries; i++) {
      try {
        return await requestFn();
      } catch (error: any) {
        lastError = error;
        if (i < maxRetries - 1) {
          await new Promise((resolve) => setTimeout(resolve, delay * Math.pow(2, i)));
        }
      }
    }

    throw lastError;
  }";

const DETAILED_ERRORS: &str = "

  /**
   * Handle API errors
   */
  private handleError(error: any): Error {
    if (axios.isAxiosError(error)) {
      const message = error.response?.data?.message || error.message || 'An error occurred';
      const apiError = new Error(message) as any;
      apiError.status = error.response?.status;
      apiError.code = error.response?.data?.code;
      apiError.details = error.response?.data?.details;
      return apiError;
    }
    return error;
  }
}
";

const PLAIN_ERRORS: &str = "

  private handleError(error: unknown): Error {
    return error instanceof Error ? error : new Error(String(error));
  }
}
";

const SINGLETON: &str = "
// Export singleton instance
export const {{NAME}}Service = new {{CAP}}Service();
";

pub fn service(entity: &str, options: &ServiceOptions) -> Rendered {
    let cap = capitalize(entity);
    let base_url = match &options.base_url {
        Some(url) => format!("'{}/{entity}'", url.trim_end_matches('/')),
        None => format!(
            "`${{process.env.NEXT_PUBLIC_API_URL || 'http://localhost:3000/api'}}/{entity}`"
        ),
    };
    let typed = |name: String| if options.with_types { name } else { "any".to_owned() };

    let vars = Vars::new()
        .with("NAME", entity)
        .with("BASE_URL", base_url)
        .with("LIST_TYPE", typed(format!("{cap}ListResponse")))
        .with("ITEM_TYPE", typed(format!("{cap}Response")))
        .with("CREATE_TYPE", typed(format!("Create{cap}Request")))
        .with("UPDATE_TYPE", typed(format!("Update{cap}Request")))
        .with("MAX_RETRIES", options.max_retries.to_string())
        .with("RETRY_DELAY", options.retry_delay_ms.to_string())
        .with("CAP", cap);

    let mut out = String::from("import axios from 'axios';\nimport { apiClient } from './axiosConfig';");
    if options.with_types {
        out.push_str(TYPES_IMPORT);
    }
    out.push_str(CRUD);
    if options.with_cache {
        out.push_str(CACHE);
    }
    if options.with_retry {
        out.push_str(RETRY);
    }
    out.push_str(if options.with_error_handling {
        DETAILED_ERRORS
    } else {
        PLAIN_ERRORS
    });
    out.push_str(SINGLETON);
    vars.render(&out)
}

const TYPES: &str = "// src/services/{{NAME}}Types.ts

export interface {{CAP}} {
  id: string;
  name: string;
  description?: string;
  createdAt: string;
  updatedAt: string;
}

export interface Create{{CAP}}Request {
  name: string;
  description?: string;
}

export interface Update{{CAP}}Request {
  name?: string;
  description?: string;
}

export interface {{CAP}}ListResponse {
  data: {{CAP}}[];
  total: number;
  page: number;
  limit: number;
}

export interface {{CAP}}Response {
  data: {{CAP}};
  message?: string;
}

export interface ApiError {
  message: string;
  code?: string;
  details?: any;
}
";

pub fn service_types(entity: &str) -> Rendered {
    Vars::new()
        .with("NAME", entity)
        .with("CAP", capitalize(entity))
        .render(TYPES)
}

const AXIOS_BASE: &str = "import axios, { AxiosInstance, AxiosRequestConfig, AxiosResponse } from 'axios';

// Create axios instance with default config
const apiClient: AxiosInstance = axios.create({
  baseURL: process.env.NEXT_PUBLIC_API_URL || 'http://localhost:3000/api',
  timeout: 10000,
  headers: {
    'Content-Type': 'application/json',
  },
});";

const AXIOS_INTERCEPTORS: &str = "

// Request interceptor
apiClient.interceptors.request.use(
  (config) => {
    if (typeof window !== 'undefined') {
      const token = localStorage.getItem('auth_token') || sessionStorage.getItem('auth_token');
      if (token) {
        config.headers.Authorization = `Bearer ${token}`;
      }
    }
    config.metadata = { startTime: new Date() };
    return config;
  },
  (error) => Promise.reject(error)
);

// Response interceptor
apiClient.interceptors.response.use(
  (response: AxiosResponse) => {
    const startTime = response.config.metadata?.startTime;
    if (startTime) {
      const duration = new Date().getTime() - startTime.getTime();
      console.log(`API Request: ${response.config.url} - ${duration}ms`);
    }
    return response;
  },
  (error) => {
    if (error.response?.status === 401 && typeof window !== 'undefined') {
      localStorage.removeItem('auth_token');
      sessionStorage.removeItem('auth_token');
      window.location.href = '/login';
    }
    if (error.response?.status === 403) {
      console.error('Access denied');
    }
    if (error.response?.status >= 500) {
      console.error('Server error occurred');
    }
    return Promise.reject(error);
  }
);";

const AXIOS_RETRY: &str = "

// Retry interceptor for failed requests
apiClient.interceptors.response.use(
  (response) => response,
  async (error) => {
    const { config } = error;

    // Only retry on network errors or 5xx server errors
    if (!config || !config.retry || error.response?.status < 500) {
      return Promise.reject(error);
    }

    config.retryCount = config.retryCount || 0;
    if (config.retryCount >= config.retry) {
      return Promise.reject(error);
    }
    config.retryCount += 1;

    const delay = config.retryDelay || {{RETRY_DELAY}};
    await new Promise((resolve) => setTimeout(resolve, delay * Math.pow(2, config.retryCount - 1)));

    return apiClient(config);
  }
);";

const AXIOS_RETRY_HELPER: &str = "

// Helper function to add retry configuration
export const withRetry = (config: AxiosRequestConfig, retries: number = {{MAX_RETRIES}}, delay: number = {{RETRY_DELAY}}) => {
  return {
    ...config,
    retry: retries,
    retryDelay: delay,
  };
};";

const AXIOS_AUTH_HELPER: &str = "

// Helper function to add auth token
export const withAuth = (config: AxiosRequestConfig) => {
  if (typeof window !== 'undefined') {
    const token = localStorage.getItem('auth_token') || sessionStorage.getItem('auth_token');
    if (token) {
      config.headers = {
        ...config.headers,
        Authorization: `Bearer ${token}`,
      };
    }
  }
  return config;
};";

pub fn axios_config(options: &ServiceOptions) -> Rendered {
    let mut out = String::from(AXIOS_BASE);
    if options.with_interceptors {
        out.push_str(AXIOS_INTERCEPTORS);
    }
    if options.with_retry {
        out.push_str(AXIOS_RETRY);
    }
    out.push_str(AXIOS_RETRY_HELPER);
    if options.with_auth {
        out.push_str(AXIOS_AUTH_HELPER);
    }
    out.push_str("\n\n// Export the configured client\nexport { apiClient };\n");

    Vars::new()
        .with("MAX_RETRIES", options.max_retries.to_string())
        .with("RETRY_DELAY", options.retry_delay_ms.to_string())
        .render(&out)
}
