//! HTML package table for an issue's technical details.

use std::borrow::Cow;

use crate::model::Package;

const TABLE_HEAD: &str =
    "<table><thead><tr><th>Name</th><th>Version</th><th>Type</th></tr></thead><tbody>";
const TABLE_TAIL: &str = "</tbody></table>";

/// Render the affected packages as an HTML table.
///
/// Returns an empty string when there are no packages. Package fields are
/// interpolated verbatim unless `escape` is set.
pub fn technical_details(packages: &[Package], escape: bool) -> String {
    if packages.is_empty() {
        return String::new();
    }

    let mut html = String::from(TABLE_HEAD);
    for package in packages {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td></tr>",
            cell(&package.name, escape),
            cell(&package.version, escape),
            cell(&package.kind, escape),
        ));
    }
    html.push_str(TABLE_TAIL);
    html
}

fn cell(value: &str, escape: bool) -> Cow<'_, str> {
    if escape {
        Cow::Owned(html_escape(value))
    } else {
        Cow::Borrowed(value)
    }
}

/// HTML escape utility function
pub fn html_escape(content: &str) -> String {
    content
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn package(name: &str, version: &str, kind: &str) -> Package {
        Package {
            name: name.to_string(),
            version: version.to_string(),
            kind: kind.to_string(),
        }
    }

    #[test]
    fn test_no_packages_is_empty() {
        assert_eq!(technical_details(&[], false), "");
        assert_eq!(technical_details(&[], true), "");
    }

    #[test]
    fn test_single_package_table() {
        let html = technical_details(&[package("openssl", "1.1.1k", "deb")], false);
        assert_eq!(
            html,
            "<table><thead><tr><th>Name</th><th>Version</th><th>Type</th></tr></thead><tbody>\
             <tr><td>openssl</td><td>1.1.1k</td><td>deb</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_one_row_per_package_and_single_close() {
        let packages = vec![
            package("zlib", "1.2.11", "deb"),
            package("libc", "2.31", "deb"),
            package("requests", "2.25.0", "python"),
        ];
        let html = technical_details(&packages, false);

        assert!(html.starts_with("<table>"));
        assert!(html.ends_with("</table>"));
        // header row plus one row per package
        assert_eq!(html.matches("<tr>").count(), packages.len() + 1);
        assert_eq!(html.matches("</table>").count(), 1);
        let zlib = html.find("zlib").unwrap();
        let libc = html.find("libc").unwrap();
        assert!(zlib < libc);
    }

    #[test]
    fn test_fields_are_raw_by_default() {
        let html = technical_details(&[package("<b>pkg</b>", "1&2", "a\"b")], false);
        assert!(html.contains("<td><b>pkg</b></td>"));
        assert!(html.contains("<td>1&2</td>"));
    }

    #[test]
    fn test_fields_escaped_on_request() {
        let html = technical_details(&[package("<b>pkg</b>", "1&2", "it's")], true);
        assert!(html.contains("<td>&lt;b&gt;pkg&lt;/b&gt;</td>"));
        assert!(html.contains("<td>1&amp;2</td>"));
        assert!(html.contains("<td>it&#x27;s</td>"));
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("hello & world"), "hello &amp; world");
        assert_eq!(html_escape("plain"), "plain");
    }
}
