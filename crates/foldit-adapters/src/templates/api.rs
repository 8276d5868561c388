//! Route handler bodies for `src/app/api`.

use foldit_core::domain::{ApiRouteOptions, capitalize};

use crate::renderer::{Rendered, Vars};

const HANDLER: &str = "
export async function {{METHOD}}({{SIGNATURE}}) {
  try {
{{BODY}}    return NextResponse.json({
      message: '{{METHOD}} {{ENTITY_CAP}} API endpoint',
{{ECHO}}      timestamp: new Date().toISOString(),
    });
  } catch (error) {
    console.error('Error in {{METHOD}} {{ENTITY}}:', error);
    return NextResponse.json(
      { error: 'Internal server error' },
      { status: 500 }
    );
  }
}
";

const AUTH_CHECK: &str = "    const authResult = await authMiddleware(request);
    if (!authResult.isAuthenticated) {
      return NextResponse.json({ error: 'Unauthorized' }, { status: 401 });
    }

";

pub fn api_route(entity: &str, options: &ApiRouteOptions) -> Rendered {
    let mut out = String::from("import { NextRequest, NextResponse } from 'next/server';\n");
    if options.auth {
        out.push_str("import { authMiddleware } from '@/lib/auth';\n");
    }
    if options.prisma {
        out.push_str("import prisma from '@/lib/prisma';\n");
    }

    let (signature, echo) = match &options.dynamic {
        Some(segment) => {
            let param = segment.param();
            let ty = if segment.is_catch_all() {
                "string[]"
            } else {
                "string"
            };
            (
                format!(
                    "\n  request: NextRequest,\n  {{ params }}: {{ params: {{ {param}: {ty} }} }}\n"
                ),
                format!("      {param},\n"),
            )
        }
        None => ("request: NextRequest".to_owned(), String::new()),
    };

    let mut body = String::new();
    if options.auth {
        body.push_str(AUTH_CHECK);
    }
    if let Some(segment) = &options.dynamic {
        body.push_str(&format!("    const {{ {} }} = params;\n\n", segment.param()));
    }
    if options.prisma {
        body.push_str(&format!(
            "    // Example database operation\n    // const {entity} = await prisma.{entity}.findMany();\n\n"
        ));
    }

    for method in &options.methods {
        let handler = Vars::new()
            .with("METHOD", method.as_str())
            .with("SIGNATURE", signature.as_str())
            .with("BODY", body.as_str())
            .with("ECHO", echo.as_str())
            .with("ENTITY", entity)
            .with("ENTITY_CAP", capitalize(entity))
            .render(HANDLER)?;
        out.push_str(&handler);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use foldit_core::domain::{DynamicSegment, HttpMethod};

    #[test]
    fn one_upper_case_export_per_method() {
        let options = ApiRouteOptions {
            methods: vec![
                HttpMethod::Get,
                HttpMethod::Post,
                HttpMethod::Put,
                HttpMethod::Delete,
            ],
            ..ApiRouteOptions::default()
        };
        let out = api_route("posts", &options).unwrap();
        assert_eq!(out.matches("export async function").count(), 4);
        assert!(out.contains("export async function DELETE(request: NextRequest)"));
        assert!(out.contains("message: 'PUT Posts API endpoint'"));
        assert!(!out.contains("authMiddleware"));
    }

    #[test]
    fn auth_gates_every_handler() {
        let options = ApiRouteOptions {
            auth: true,
            ..ApiRouteOptions::default()
        };
        let out = api_route("posts", &options).unwrap();
        assert!(out.contains("import { authMiddleware } from '@/lib/auth';"));
        assert_eq!(out.matches("{ status: 401 }").count(), 2);
    }

    #[test]
    fn dynamic_param_is_destructured_and_echoed() {
        let options = ApiRouteOptions {
            prisma: true,
            dynamic: Some(DynamicSegment::new("id", false).unwrap()),
            ..ApiRouteOptions::default()
        };
        let out = api_route("users", &options).unwrap();
        assert!(out.contains("{ params }: { params: { id: string } }"));
        assert!(out.contains("const { id } = params;"));
        assert!(out.contains("      id,\n"));
        assert!(out.contains("// const users = await prisma.users.findMany();"));
    }
}
