/// Joins two route path fragments into a single normalized path.
///
/// Empty segments collapse, so callers may write prefixes and paths with or
/// without surrounding slashes. The result always starts with `/`; joining
/// two empty fragments yields `/`.
pub fn join(prefix: &str, segment: &str) -> String {
    let mut joined = String::new();
    for part in prefix.split('/').chain(segment.split('/')) {
        if part.is_empty() {
            continue;
        }
        joined.push('/');
        joined.push_str(part);
    }
    if joined.is_empty() {
        joined.push('/');
    }
    joined
}
