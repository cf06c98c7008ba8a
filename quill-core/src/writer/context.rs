use crate::InterpolateError;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment {
    #[default]
    None,
    /// A top level argument.
    Value,
    /// An element of a list argument.
    ListElement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context {
    /// Placeholders substituted so far.
    pub counter: u32,
    pub fragment: Fragment,
    /// Set while classifying the output of a value provider.
    pub provided: bool,
}

impl Context {
    pub fn new(fragment: Fragment) -> Self {
        Self {
            counter: 0,
            fragment,
            provided: false,
        }
    }
    pub fn update_from(&mut self, context: &Context) {
        self.counter = context.counter;
    }
    /// Error to raise for a value that cannot be rendered in this fragment.
    pub fn reject(&self, error: InterpolateError) -> InterpolateError {
        match (self.fragment, error) {
            (
                Fragment::ListElement,
                InterpolateError::InvalidValue | InterpolateError::NotValidText,
            ) => InterpolateError::InvalidListElement,
            _ => error,
        }
    }
}

impl Context {
    pub fn switch_fragment<'s>(&'s mut self, fragment: Fragment) -> ContextUpdater<'s> {
        ContextUpdater {
            current: Context { fragment, ..*self },
            previous: self,
        }
    }
    pub fn switch_provided<'s>(&'s mut self) -> ContextUpdater<'s> {
        ContextUpdater {
            current: Context {
                provided: true,
                ..*self
            },
            previous: self,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new(Fragment::None)
    }
}

pub struct ContextUpdater<'a> {
    pub current: Context,
    pub previous: &'a mut Context,
}

impl<'a> Drop for ContextUpdater<'a> {
    fn drop(&mut self) {
        self.previous.update_from(&self.current);
    }
}
