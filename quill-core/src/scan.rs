/// Number of placeholder markers in `template`.
///
/// Markers are matched literally, quoted SQL literals inside the template are
/// not skipped.
pub fn count_placeholders(template: &str, marker: char) -> usize {
    template.matches(marker).count()
}

/// Splits `template` around its markers, yielding one more piece than there
/// are markers.
pub fn template_pieces(template: &str, marker: char) -> impl Iterator<Item = &str> {
    template.split(marker)
}
