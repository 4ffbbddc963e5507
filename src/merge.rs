//! Splice the generated nav into a base site configuration.

/// Indent every non-empty line of `nav` by two spaces and substitute it for
/// `placeholder` in `base`.
///
/// Returns `None` when `base` does not contain the placeholder.
pub fn merge_nav(base: &str, nav: &str, placeholder: &str) -> Option<String> {
    if !base.contains(placeholder) {
        return None;
    }
    let indented = nav
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("  {}", line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    Some(base.replace(placeholder, &indented))
}
