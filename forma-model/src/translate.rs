use crate::Record;

/// Translation contract: resolves a key (with optional interpolation
/// parameters) to display text.
///
/// Implementations must return the key unchanged when no translation
/// exists. Label fallback chains detect "unresolved" by comparing the result
/// with the key, so this convention is load-bearing.
pub trait Translate: Send + Sync {
    fn translate(&self, key: &str, params: Option<&Record>) -> String;

    /// Returns the translation, or `None` if the key is unresolved.
    fn resolve(&self, key: &str) -> Option<String> {
        let text = self.translate(key, None);
        (text != key).then_some(text)
    }
}

impl<F> Translate for F
where
    F: Fn(&str, Option<&Record>) -> String + Send + Sync,
{
    fn translate(&self, key: &str, params: Option<&Record>) -> String {
        self(key, params)
    }
}
