//! State definitions: one named node of a declarative state table.
//!
//! A definition bundles everything the driver needs to know about a state:
//! which automatic transitions leave it, which states can be requested
//! manually from it, what runs when it is entered, and how it renders.

use super::guard::AutoTransition;
use super::binding::HookContext;
use super::error::MachineError;
use super::render::{Component, RenderProps};
use std::fmt;

/// Hook run right after a transition into a state is committed.
pub type BeforeEnter<D> =
    Box<dyn Fn(&HookContext<'_, D>) -> Result<(), MachineError> + Send + Sync>;

/// Render function of a state.
pub type RenderFn<R> = Box<dyn Fn(&RenderProps<'_>) -> R + Send + Sync>;

/// One named state of a [`StateTable`](super::StateTable).
///
/// `D` is the data payload guards and hooks read; `R` is whatever the
/// host's renderable output type is.
///
/// # Example
///
/// ```rust
/// use statecraft::core::StateDefinition;
///
/// struct Form {
///     a: i64,
/// }
///
/// let s1: StateDefinition<Form, String> = StateDefinition::new("s1")
///     .auto_transition(|f: &Form| f.a == 2, "s2")
///     .valid_transitions(["s2"])
///     .render(|props| format!("in {}", props.current_state()));
///
/// assert_eq!(s1.name(), "s1");
/// assert!(s1.allows("s2"));
/// assert!(!s1.allows("s3"));
/// ```
pub struct StateDefinition<D, R> {
    name: String,
    auto_transitions: Vec<AutoTransition<D>>,
    valid_transitions: Option<Vec<String>>,
    before_enter: Option<BeforeEnter<D>>,
    render: Option<RenderFn<R>>,
    component: Option<Box<dyn Component<R>>>,
}

impl<D, R> StateDefinition<D, R> {
    /// Create a state with no transitions and no renderer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            auto_transitions: Vec::new(),
            valid_transitions: None,
            before_enter: None,
            render: None,
            component: None,
        }
    }

    /// Append an automatic transition. Declaration order is evaluation order.
    pub fn auto_transition<F>(mut self, guard: F, target: impl Into<String>) -> Self
    where
        F: Fn(&D) -> bool + Send + Sync + 'static,
    {
        self.auto_transitions.push(AutoTransition::new(guard, target));
        self
    }

    /// Append a pre-built automatic transition.
    pub fn with_auto_transition(mut self, transition: AutoTransition<D>) -> Self {
        self.auto_transitions.push(transition);
        self
    }

    /// Set the whitelist of manually reachable states, replacing any previous one.
    pub fn valid_transitions<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_transitions = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Add one name to the whitelist, creating it if absent.
    pub fn allow(mut self, name: impl Into<String>) -> Self {
        self.valid_transitions
            .get_or_insert_with(Vec::new)
            .push(name.into());
        self
    }

    /// Set the hook run after a transition into this state commits.
    pub fn before_enter<F>(mut self, hook: F) -> Self
    where
        F: Fn(&HookContext<'_, D>) -> Result<(), MachineError> + Send + Sync + 'static,
    {
        self.before_enter = Some(Box::new(hook));
        self
    }

    /// Set the render function. Takes precedence over a component.
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&RenderProps<'_>) -> R + Send + Sync + 'static,
    {
        self.render = Some(Box::new(render));
        self
    }

    /// Set the static component rendered when no render function is present.
    pub fn component<C>(mut self, component: C) -> Self
    where
        C: Component<R> + 'static,
    {
        self.component = Some(Box::new(component));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn auto_transitions(&self) -> &[AutoTransition<D>] {
        &self.auto_transitions
    }

    /// The manual-transition whitelist; `None` means manual transitions are disallowed.
    pub fn valid_transitions_list(&self) -> Option<&[String]> {
        self.valid_transitions.as_deref()
    }

    /// Check whether `target` may be requested manually from this state.
    pub fn allows(&self, target: &str) -> bool {
        self.valid_transitions
            .as_ref()
            .is_some_and(|names| names.iter().any(|n| n == target))
    }

    /// First automatic transition whose guard holds for `data`.
    pub fn first_firing(&self, data: &D) -> Option<&AutoTransition<D>> {
        self.auto_transitions.iter().find(|t| t.fires(data))
    }

    pub fn before_enter_hook(&self) -> Option<&BeforeEnter<D>> {
        self.before_enter.as_ref()
    }

    pub fn render_fn(&self) -> Option<&RenderFn<R>> {
        self.render.as_ref()
    }

    pub fn component_ref(&self) -> Option<&dyn Component<R>> {
        self.component.as_deref()
    }

    pub fn has_renderer(&self) -> bool {
        self.render.is_some() || self.component.is_some()
    }
}

impl<D, R> fmt::Debug for StateDefinition<D, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateDefinition")
            .field("name", &self.name)
            .field("auto_transitions", &self.auto_transitions)
            .field("valid_transitions", &self.valid_transitions)
            .field("before_enter", &self.before_enter.is_some())
            .field("render", &self.render.is_some())
            .field("component", &self.component.is_some())
            .finish()
    }
}
