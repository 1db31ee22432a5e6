/// The directives every schema provides. Both are evaluated during field
/// collection to decide whether a field or fragment participates in a
/// selection set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Directive {
    /// `@include(if: Boolean!)` on fields, fragment spreads, and inline
    /// fragments.
    Include,

    /// `@skip(if: Boolean!)` on fields, fragment spreads, and inline
    /// fragments.
    Skip,
}
impl Directive {
    pub(crate) const BUILTINS: &'static [Directive] = &[
        Directive::Include,
        Directive::Skip,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Self::Include =>
                "Directs the executor to include this field or fragment only \
                when the `if` argument is true.",
            Self::Skip =>
                "Directs the executor to skip this field or fragment when the \
                `if` argument is true.",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Skip => "skip",
        }
    }
}
