//! Mutable state carried through a single render.
//!
//! A context tracks which namespace bindings are in effect, how deep the renderer is in the tree,
//! and where mixed content (text among elements) was first seen, so that indentation can be
//! suppressed below that point.
//!
//! A context belongs to one render at a time. It may be reused once a render has fully unwound,
//! at which point depth is back to 0 and no bindings remain in scope.

/// One namespace binding currently in effect: `xmlns:prefix="namespace"` or `xmlns="namespace"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceScope {
    /// The namespace URI.
    pub namespace: String,

    /// The prefix bound to the namespace, or `None` for a default namespace.
    pub prefix: Option<String>,
}
impl NamespaceScope {
    /// Create a binding for a prefixed namespace.
    pub fn prefixed(namespace: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            prefix: Some(prefix.into()),
        }
    }

    /// Create a binding for a default namespace.
    pub fn default_namespace(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            prefix: None,
        }
    }
}

/// Per-render state: namespace scope stack, tree depth, indentation, and the mixed-content marker.
#[derive(Debug, Clone, Default)]
pub struct RenderContext<'a> {
    /// Innermost binding last
    scopes: Vec<NamespaceScope>,
    depth: usize,
    indent: Option<&'a str>,
    mixed_content_depth: Option<usize>,
}
impl<'a> RenderContext<'a> {
    /// Creates a fresh context. `indent` is one level of indentation, or `None` for compact output.
    #[must_use]
    pub fn new(indent: Option<&'a str>) -> Self {
        Self {
            scopes: vec![],
            depth: 0,
            indent,
            mixed_content_depth: None,
        }
    }

    /// Returns true if the innermost binding of `prefix` is bound to `namespace`.
    ///
    /// Only the first match (innermost) counts: if the prefix was rebound to another namespace
    /// deeper in the tree, it is not in scope for this one.
    #[must_use]
    pub fn is_prefix_in_scope(&self, prefix: &str, namespace: &str) -> bool {
        self.scopes
            .iter()
            .rev()
            .find(|s| s.prefix.as_deref() == Some(prefix))
            .is_some_and(|s| s.namespace == namespace)
    }

    /// Returns true if any binding, prefixed or not, is for `namespace`.
    #[must_use]
    pub fn is_namespace_in_scope(&self, namespace: &str) -> bool {
        self.scopes.iter().any(|s| s.namespace == namespace)
    }

    /// Adds a binding to the scope stack.
    pub fn push_namespace(&mut self, scope: NamespaceScope) {
        self.scopes.push(scope);
    }

    /// Removes the innermost binding from the scope stack.
    pub fn pop_namespace(&mut self) -> Option<NamespaceScope> {
        self.scopes.pop()
    }

    /// Returns the bindings currently in scope, innermost last.
    #[must_use]
    pub fn scopes(&self) -> &[NamespaceScope] {
        &self.scopes
    }

    /// Returns true if an indentation unit was configured.
    #[must_use]
    pub fn indent_enabled(&self) -> bool {
        self.indent.is_some()
    }

    /// Returns the indentation unit, if any.
    #[must_use]
    pub fn indent(&self) -> Option<&'a str> {
        self.indent
    }

    /// Returns the current tree depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Enter an element's children.
    pub fn increment_depth(&mut self) {
        self.depth += 1;
    }

    /// Leave an element's children.
    pub fn decrement_depth(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Record the current depth as the mixed-content boundary, unless one is already recorded.
    pub fn mark_mixed_content_depth(&mut self) {
        if self.mixed_content_depth.is_none() {
            self.mixed_content_depth = Some(self.depth);
        }
    }

    /// Returns true if a mixed-content boundary is recorded at or above the current depth.
    #[must_use]
    pub fn in_mixed_context(&self) -> bool {
        self.mixed_content_depth.is_some_and(|d| self.depth >= d)
    }

    /// Clears the mixed-content boundary, but only at the depth that recorded it.
    pub fn reset_mixed_content_depth(&mut self) {
        if self.mixed_content_depth == Some(self.depth) {
            self.mixed_content_depth = None;
        }
    }

    /// Returns the recorded mixed-content boundary, if any.
    #[must_use]
    pub fn mixed_content_depth(&self) -> Option<usize> {
        self.mixed_content_depth
    }

    /// Returns true if the context is back at its starting state: depth 0, no bindings, no marker.
    ///
    /// A bare text node rendered at depth 0 leaves the marker set, since no enclosing element
    /// unwinds past it.
    #[must_use]
    pub fn is_unwound(&self) -> bool {
        self.depth == 0 && self.scopes.is_empty() && self.mixed_content_depth.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_not_in_scope_when_empty() {
        let context = RenderContext::new(None);
        assert!(!context.is_prefix_in_scope("my", "urn:a"));
        assert!(!context.is_namespace_in_scope("urn:a"));
    }

    #[test]
    fn test_prefix_in_scope() {
        let mut context = RenderContext::new(None);
        context.push_namespace(NamespaceScope::prefixed("urn:a", "my"));
        assert!(context.is_prefix_in_scope("my", "urn:a"));
        assert!(!context.is_prefix_in_scope("my", "urn:b"));
        assert!(!context.is_prefix_in_scope("other", "urn:a"));
    }

    #[test]
    fn test_innermost_prefix_wins() {
        let mut context = RenderContext::new(None);
        context.push_namespace(NamespaceScope::prefixed("urn:a", "my"));
        context.push_namespace(NamespaceScope::prefixed("urn:b", "my"));

        assert!(context.is_prefix_in_scope("my", "urn:b"));
        assert!(!context.is_prefix_in_scope("my", "urn:a"));

        context.pop_namespace();
        assert!(context.is_prefix_in_scope("my", "urn:a"));
    }

    #[test]
    fn test_namespace_in_scope_ignores_prefix() {
        let mut context = RenderContext::new(None);
        context.push_namespace(NamespaceScope::prefixed("urn:a", "my"));
        assert!(context.is_namespace_in_scope("urn:a"));

        context.push_namespace(NamespaceScope::default_namespace("urn:b"));
        assert!(context.is_namespace_in_scope("urn:b"));
        assert!(!context.is_prefix_in_scope("my", "urn:b"));
    }

    #[test]
    fn test_indent_enabled() {
        assert!(!RenderContext::new(None).indent_enabled());
        let context = RenderContext::new(Some("  "));
        assert!(context.indent_enabled());
        assert_eq!(context.indent(), Some("  "));
    }

    #[test]
    fn test_first_mark_wins() {
        let mut context = RenderContext::new(None);
        context.increment_depth();
        context.mark_mixed_content_depth();
        context.increment_depth();
        context.mark_mixed_content_depth();
        assert_eq!(context.mixed_content_depth(), Some(1));
        assert!(context.in_mixed_context());
    }

    #[test]
    fn test_mixed_context_below_mark_only() {
        let mut context = RenderContext::new(None);
        context.increment_depth();
        context.increment_depth();
        context.mark_mixed_content_depth();

        context.decrement_depth();
        assert!(!context.in_mixed_context());
        context.increment_depth();
        context.increment_depth();
        assert!(context.in_mixed_context());
    }

    #[test]
    fn test_reset_only_at_marked_depth() {
        let mut context = RenderContext::new(None);
        context.increment_depth();
        context.mark_mixed_content_depth();

        context.increment_depth();
        context.reset_mixed_content_depth();
        assert_eq!(context.mixed_content_depth(), Some(1));

        context.decrement_depth();
        context.reset_mixed_content_depth();
        assert_eq!(context.mixed_content_depth(), None);
        assert!(!context.in_mixed_context());
    }

    #[test]
    fn test_unwound() {
        let mut context = RenderContext::new(None);
        assert!(context.is_unwound());

        context.increment_depth();
        context.push_namespace(NamespaceScope::default_namespace("urn:a"));
        assert!(!context.is_unwound());

        context.pop_namespace();
        context.decrement_depth();
        assert!(context.is_unwound());
    }
}
