/// Joins flags into a single shell-quoted string.
pub fn shelljoin<S: AsRef<str>>(words: &[S]) -> String {
    shell_words::join(words.iter().map(|w| w.as_ref()))
}
