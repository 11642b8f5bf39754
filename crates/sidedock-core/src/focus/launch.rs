/// Field codes a desktop-entry `Exec` line may carry; they have no meaning
/// when the dock launches an application without arguments.
const FIELD_CODES: [char; 11] = ['f', 'F', 'u', 'U', 'd', 'D', 'n', 'N', 'i', 'c', 'k'];
const DEPRECATED_FIELD_CODES: [char; 2] = ['v', 'm'];

/// Remove freedesktop field codes (`%U`, `%f`, ...) and unescape `%%`.
///
/// Whitespace left behind by a removed code is collapsed.
pub fn strip_field_codes(command: &str) -> String {
    let mut out = String::with_capacity(command.len());
    let mut chars = command.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('%') => {
                out.push('%');
                chars.next();
            }
            Some(code) if FIELD_CODES.contains(code) || DEPRECATED_FIELD_CODES.contains(code) => {
                chars.next();
            }
            _ => out.push('%'),
        }
    }

    out.split_whitespace().collect::<Vec<_>>().join(" ")
}
