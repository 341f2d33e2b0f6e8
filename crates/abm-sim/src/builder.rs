//! Fluent builder for constructing a [`Sim`].

use abm_core::{PropertyBag, SimConfig};
use abm_spatial::{Environment, Environments};

use crate::{Agent, Helper, Schedule, Sim, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Required inputs
///
/// - [`SimConfig`]: epoch count, verbosity, seed
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                   |
/// |----------------------|---------------------------|
/// | `.properties(bag)`   | empty `PropertyBag`       |
/// | `.environment(env)`  | no environments           |
/// | `.agent(a)`          | no agents                 |
/// | `.helper(h)`         | no helpers                |
///
/// Agents added here are staged, so they join the live set at the start of
/// epoch 0.  Agents that need a grid position at setup are easier to add
/// after `build`, through `sim.schedule.add_agent` and `sim.place`, since
/// placement needs the id.
///
/// # Example
///
/// ```rust,ignore
/// let mut sim = SimBuilder::new(SimConfig::new(100))
///     .property("birth_rate", 0.1_f64)
///     .environment(OccupancyGrid::new("world", Extent::plane(50, 50)))
///     .helper(PopulationCounter)
///     .build()?;
/// sim.run()?;
/// ```
pub struct SimBuilder {
    config:       SimConfig,
    properties:   PropertyBag,
    environments: Environments,
    schedule:     Schedule,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            properties:   PropertyBag::new(),
            environments: Environments::new(),
            schedule:     Schedule::new(),
        }
    }

    /// Replace the property bag wholesale.
    pub fn properties(mut self, properties: PropertyBag) -> Self {
        self.properties = properties;
        self
    }

    /// Set one property.
    pub fn property<T: 'static>(mut self, key: impl Into<String>, value: T) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Register an environment under its own name.
    pub fn environment(mut self, environment: impl Into<Environment>) -> Self {
        self.environments.register(environment);
        self
    }

    pub fn agent<A: Agent>(mut self, agent: A) -> Self {
        self.schedule.add_agent(agent);
        self
    }

    pub fn helper<H: Helper>(mut self, helper: H) -> Self {
        self.schedule.add_helper(helper);
        self
    }

    /// Validate the configuration and return a ready-to-run [`Sim`].
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        Ok(Sim::from_parts(
            self.config,
            self.schedule,
            self.environments,
            self.properties,
        ))
    }
}
