//! App router page bodies.

use foldit_core::domain::{DynamicSegment, capitalize};

use crate::renderer::{Rendered, Vars};

const STATIC_PAGE: &str = "export default function {{COMPONENT}}() {
  return (
    <div>
      <h1>{{COMPONENT}}</h1>
    </div>
  );
}
";

const DYNAMIC_PAGE: &str = "export default function {{COMPONENT}}({ params }: { params: { {{PARAM}}: {{PARAM_TYPE}} } }) {
  return (
    <div>
      <h1>{{COMPONENT}}</h1>
      <p>{{PARAM}}: {{PARAM_DISPLAY}}</p>
    </div>
  );
}
";

const PAGE_TEST: &str = "import { render, screen } from '@testing-library/react';
import {{COMPONENT}} from '../page';

describe('{{COMPONENT}} Page', () => {
  it('renders without crashing', () => {
    render({{ELEMENT}});
    expect(screen.getByRole('heading')).toBeInTheDocument();
  });

  it('displays the correct title', () => {
    render({{ELEMENT}});
    expect(screen.getByText('{{COMPONENT}}')).toBeInTheDocument();
  });
});
";

pub fn page(entity: &str, dynamic: Option<&DynamicSegment>) -> Rendered {
    let component = capitalize(entity);
    match dynamic {
        None => Vars::new().with("COMPONENT", component).render(STATIC_PAGE),
        Some(segment) => {
            let param = segment.param();
            let (param_type, display) = if segment.is_catch_all() {
                ("string[]", format!("{{params.{param}.join('/')}}"))
            } else {
                ("string", format!("{{params.{param}}}"))
            };
            Vars::new()
                .with("COMPONENT", component)
                .with("PARAM", param)
                .with("PARAM_TYPE", param_type)
                .with("PARAM_DISPLAY", display)
                .render(DYNAMIC_PAGE)
        }
    }
}

pub fn page_test(entity: &str, dynamic: Option<&DynamicSegment>) -> Rendered {
    let component = capitalize(entity);
    let element = match dynamic {
        None => format!("<{component} />"),
        Some(segment) if segment.is_catch_all() => {
            format!("<{component} params={{{{ {}: ['test'] }}}} />", segment.param())
        }
        Some(segment) => {
            format!("<{component} params={{{{ {}: 'test' }}}} />", segment.param())
        }
    };
    Vars::new()
        .with("COMPONENT", component)
        .with("ELEMENT", element)
        .render(PAGE_TEST)
}

pub fn component_index(entity: &str) -> String {
    format!("// Components for {entity} page\n// Add your component exports here\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_page_declares_capitalized_component() {
        let out = page("about", None).unwrap();
        assert!(out.contains("export default function About()"));
        assert!(out.contains("<h1>About</h1>"));
    }

    #[test]
    fn only_first_character_is_capitalized() {
        assert!(page("user-profile", None).unwrap().contains("function User-profile()"));
        assert!(page("", None).unwrap().contains("export default function ()"));
    }

    #[test]
    fn catch_all_page_joins_segments() {
        let segment = DynamicSegment::new("slug", true).unwrap();
        let out = page("docs", Some(&segment)).unwrap();
        assert!(out.contains("params: { slug: string[] }"));
        assert!(out.contains("{params.slug.join('/')}"));
    }

    #[test]
    fn dynamic_page_shows_param() {
        let segment = DynamicSegment::new("id", false).unwrap();
        let out = page("users", Some(&segment)).unwrap();
        assert!(out.contains("params: { id: string }"));
        assert!(out.contains("<p>id: {params.id}</p>"));
    }

    #[test]
    fn test_template_references_page() {
        let out = page_test("about", None).unwrap();
        assert!(out.contains("import About from '../page';"));
        assert!(out.contains("describe('About Page'"));
        assert!(out.contains("render(<About />);"));
        assert!(out.contains("screen.getByText('About')"));
    }

    #[test]
    fn dynamic_test_passes_params() {
        let segment = DynamicSegment::new("slug", true).unwrap();
        let out = page_test("blog", Some(&segment)).unwrap();
        assert!(out.contains("<Blog params={{ slug: ['test'] }} />"));
    }
}
