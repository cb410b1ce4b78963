//! Display utilities for CLI output formatting.

/// Renders a site name sequence as a list literal, e.g. `["North", "South"]`.
///
/// Names are quoted so that sites containing spaces or commas stay readable;
/// an empty scan renders as `[]`.
pub(crate) fn render_site_list(sites: &[String]) -> String {
    let mut out = String::from("[");
    for (i, name) in sites.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push('"');
        out.push_str(name);
        out.push('"');
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_list() {
        assert_eq!(render_site_list(&[]), "[]");
    }

    #[test]
    fn test_render_single_site() {
        assert_eq!(render_site_list(&["North".to_string()]), r#"["North"]"#);
    }

    #[test]
    fn test_render_multiple_sites() {
        let sites = vec!["Substation A".to_string(), "Plant-2".to_string()];
        assert_eq!(render_site_list(&sites), r#"["Substation A", "Plant-2"]"#);
    }
}
