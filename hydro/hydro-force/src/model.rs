//! The force-model trait and its memoizing evaluator.

use hydro_types::{BodyStates, Environment, StateSnapshot, Wrench};

use crate::command::{CommandSource, Commands};
use crate::error::ForceError;
use crate::observer::Observer;
use crate::Result;

/// Contract every force model obeys.
///
/// A force model is a pure function of the body's state history, the time,
/// the environment and its resolved commands. It carries its own identity
/// (model name, body name, reference frame) so the summation step and the
/// observation pipeline can address it.
pub trait ForceModel {
    /// Model name, e.g. `"radiation damping"`.
    fn name(&self) -> &str;

    /// Name of the body this model acts on.
    fn body_name(&self) -> &str;

    /// Name of the reference frame the returned wrench is expressed in.
    ///
    /// Defaults to the body's own frame.
    fn frame(&self) -> &str {
        self.body_name()
    }

    /// Short names of the commands this model reads each evaluation.
    fn command_names(&self) -> &[String] {
        &[]
    }

    /// How many seconds of velocity history this model needs retained.
    ///
    /// The simulation driver sizes each body's histories to the maximum
    /// span over its attached force models. Most models need none.
    fn history_span(&self) -> f64 {
        0.0
    }

    /// Compute the wrench exerted on the body at time `t`.
    fn get_force(
        &self,
        states: &BodyStates,
        t: f64,
        env: &Environment,
        commands: &Commands,
    ) -> Result<Wrench>;

    /// Publish model-specific diagnostic scalars.
    ///
    /// Called after the standard six wrench components are published;
    /// default is to publish nothing.
    fn extra_observations(&self, _observer: &mut dyn Observer) {}
}

/// Memoized record of the last evaluation.
#[derive(Debug, Clone)]
struct Memo {
    time_bits: u64,
    snapshot: StateSnapshot,
    wrench: Wrench,
}

/// The callable the simulation driver holds for each attached force.
///
/// Wraps a concrete [`ForceModel`] with the generic memoization policy: the
/// cached wrench is returned, without re-invoking the model, if and only if
/// the `(time, state snapshot)` pair is bit-identical to the previous call.
/// This matters because a step may query the same force twice (once for
/// observation, once for the actual derivative) and recomputing a
/// radiation-damping convolution twice per step would double its cost for
/// no benefit.
#[derive(Debug)]
pub struct ForceEvaluator<M: ForceModel> {
    model: M,
    memo: Option<Memo>,
}

impl<M: ForceModel> ForceEvaluator<M> {
    /// Wrap a force model.
    #[must_use]
    pub fn new(model: M) -> Self {
        Self { model, memo: None }
    }

    /// The wrapped model.
    #[must_use]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// The wrapped model's retained-history requirement.
    #[must_use]
    pub fn history_span(&self) -> f64 {
        self.model.history_span()
    }

    /// Evaluate the force at time `t`, reusing the memoized wrench when the
    /// `(time, state)` pair has not changed since the previous call.
    pub fn evaluate(
        &mut self,
        states: &BodyStates,
        t: f64,
        env: &Environment,
        source: &dyn CommandSource,
    ) -> Result<Wrench> {
        let snapshot = states.snapshot();
        if let Some(memo) = &self.memo {
            if memo.time_bits == t.to_bits() && memo.snapshot == snapshot {
                tracing::trace!(model = self.model.name(), t, "returning memoized wrench");
                return Ok(memo.wrench.clone());
            }
        }
        let commands = self.resolve_commands(source, t)?;
        let wrench = self.model.get_force(states, t, env, &commands)?;
        self.memo = Some(Memo {
            time_bits: t.to_bits(),
            snapshot,
            wrench: wrench.clone(),
        });
        Ok(wrench)
    }

    /// Retrieve one named command for the wrapped model at time `t`.
    pub fn get_command(&self, name: &str, source: &dyn CommandSource, t: f64) -> Result<f64> {
        let key = format!("{}({})", self.model.name(), name);
        source
            .get(&key, t)
            .ok_or_else(|| ForceError::missing_command(name, self.model.name()))
    }

    /// Retrieve every command the wrapped model declared.
    pub fn get_commands(&self, source: &dyn CommandSource, t: f64) -> Result<Commands> {
        self.resolve_commands(source, t)
    }

    /// Publish the latest wrench's six components plus the model's extra
    /// observations. Publishes nothing before the first evaluation.
    pub fn feed(&self, observer: &mut dyn Observer) {
        if let Some(memo) = &self.memo {
            let v = memo.wrench.to_vector();
            let model = self.model.name();
            let body = self.model.body_name();
            for (component, value) in ["Fx", "Fy", "Fz", "Mx", "My", "Mz"].iter().zip(v.iter()) {
                observer.record(&format!("{component}({model},{body})"), *value);
            }
        }
        self.model.extra_observations(observer);
    }

    fn resolve_commands(&self, source: &dyn CommandSource, t: f64) -> Result<Commands> {
        let mut commands = Commands::empty();
        for name in self.model.command_names() {
            commands.insert(name.clone(), self.get_command(name, source, t)?);
        }
        Ok(commands)
    }
}
