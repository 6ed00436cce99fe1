//! Per-event DAQ orchestration.

use crate::factory::{build_digitizer, build_trigger, DaqParams};
use wcdaq_core::{
    CylindricalVolumes, DetectorRegion, Digit, Digitizer, DigitizerKind, Error, EventSummary,
    OutputRecord, RawHit, Result, Trigger, TriggerKind, TriggerWindow, VolumeLookup,
};

/// Run-level DAQ configuration: the chosen algorithm names plus the
/// parameters of every registered strategy.
///
/// Names are free-form strings resolved against the registry at first use;
/// unknown names are accepted here and rejected when the pipeline starts.
#[derive(Clone, Debug)]
pub struct DaqConfig {
    /// Configured digitizer name.
    pub digitizer: String,
    /// Configured trigger name.
    pub trigger: String,
    /// Algorithm parameters.
    pub params: DaqParams,
}

impl Default for DaqConfig {
    fn default() -> Self {
        Self {
            digitizer: DigitizerKind::Ski.name().to_owned(),
            trigger: TriggerKind::NDigits.name().to_owned(),
            params: DaqParams::default(),
        }
    }
}

impl DaqConfig {
    /// Creates a configuration with the default algorithm pair.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the digitizer name.
    #[must_use]
    pub fn with_digitizer(mut self, name: impl Into<String>) -> Self {
        self.digitizer = name.into();
        self
    }

    /// Sets the trigger name.
    #[must_use]
    pub fn with_trigger(mut self, name: impl Into<String>) -> Self {
        self.trigger = name.into();
        self
    }

    /// Sets the algorithm parameters.
    #[must_use]
    pub fn with_params(mut self, params: DaqParams) -> Self {
        self.params = params;
        self
    }
}

/// Everything the upstream stage hands over for one event.
///
/// The digit and window collections may already be partially populated by
/// the transport stage; the orchestrator only drives the missing steps.
#[derive(Clone, Debug, Default)]
pub struct EventContext {
    /// Index of the event within the run.
    pub event_index: u32,
    /// Primary vertex position (mm).
    pub vertex: [f64; 3],
    /// Name of the physical volume the primary track stopped in.
    pub stopping_volume: String,
    /// Number of stored trajectories.
    pub track_count: u32,
    /// Raw hits from the transport stage.
    pub raw_hits: Vec<RawHit>,
    /// Pre-populated digits, if the upstream stage digitized already.
    pub digits: Vec<Digit>,
    /// Pre-populated trigger windows, if the upstream stage triggered already.
    pub windows: Vec<TriggerWindow>,
}

struct DaqInstances {
    digitizer: Box<dyn Digitizer>,
    trigger: Box<dyn Trigger>,
}

/// Drives the digitize/trigger/record chain for one worker.
///
/// Strategy instances are constructed lazily on the first event and reused
/// for the rest of the run. Orchestrators are not shared: a host that
/// processes events concurrently gives each worker its own instance, which
/// keeps the lazy slot single-threaded and lock-free.
pub struct EventOrchestrator {
    config: DaqConfig,
    volumes: Box<dyn VolumeLookup>,
    instances: Option<DaqInstances>,
}

impl EventOrchestrator {
    /// Creates an orchestrator with the reference cylindrical geometry.
    #[must_use]
    pub fn new(config: DaqConfig) -> Self {
        Self {
            config,
            volumes: Box::new(CylindricalVolumes::default()),
            instances: None,
        }
    }

    /// Replaces the geometry lookup.
    #[must_use]
    pub fn with_volumes(mut self, volumes: Box<dyn VolumeLookup>) -> Self {
        self.volumes = volumes;
        self
    }

    /// Returns true once the strategy instances have been constructed.
    #[must_use]
    pub fn is_constructed(&self) -> bool {
        self.instances.is_some()
    }

    /// Constructs the configured strategy instances if not yet done.
    ///
    /// Idempotent: subsequent calls without an intervening
    /// [`invalidate`](Self::invalidate) are no-ops.
    ///
    /// # Errors
    ///
    /// Fatal for the run if either configured name resolved to the
    /// undefined sentinel or refuses construction.
    pub fn begin_event(&mut self) -> Result<()> {
        if self.instances.is_some() {
            return Ok(());
        }

        let digitizer_kind = DigitizerKind::from_name(&self.config.digitizer);
        if digitizer_kind == DigitizerKind::Undefined {
            return Err(Error::UndefinedDigitizer(self.config.digitizer.clone()));
        }
        let trigger_kind = TriggerKind::from_name(&self.config.trigger);
        if trigger_kind == TriggerKind::Undefined {
            return Err(Error::UndefinedTrigger(self.config.trigger.clone()));
        }

        let digitizer = build_digitizer(digitizer_kind, &self.config.params)?;
        let trigger = build_trigger(trigger_kind, &self.config.params)?;
        log::debug!(
            "constructed DAQ instances: digitizer={}, trigger={}",
            digitizer.name(),
            trigger.name()
        );
        self.instances = Some(DaqInstances { digitizer, trigger });
        Ok(())
    }

    /// Drops the constructed instances after a reconfiguration.
    pub fn invalidate(&mut self) {
        self.instances = None;
    }

    /// Classifies the region an event vertex falls into.
    #[must_use]
    pub fn starting_region(&self, vertex: [f64; 3]) -> DetectorRegion {
        self.volumes.region_at(vertex)
    }

    /// Classifies the region a named stopping volume belongs to.
    #[must_use]
    pub fn stopping_region(&self, volume_name: &str) -> DetectorRegion {
        self.volumes.region_named(volume_name)
    }

    /// Completes the event: runs the missing pipeline steps, digitization
    /// before triggering, and assembles the output record.
    ///
    /// Empty raw hit collections are valid input and flow through to an
    /// empty digit collection and zero windows.
    ///
    /// # Errors
    ///
    /// Propagates the fatal configuration error if the strategies could not
    /// be constructed.
    pub fn end_event(&mut self, ctx: EventContext) -> Result<OutputRecord> {
        self.begin_event()?;
        let instances = self
            .instances
            .as_ref()
            .ok_or_else(|| Error::Config("DAQ instances missing after construction".into()))?;

        let digits = if ctx.digits.is_empty() {
            instances.digitizer.digitize(&ctx.raw_hits)
        } else {
            ctx.digits
        };
        let windows = if ctx.windows.is_empty() {
            instances.trigger.scan(&digits)
        } else {
            ctx.windows
        };

        let summary = EventSummary {
            vertex: ctx.vertex,
            vertex_region: self.starting_region(ctx.vertex),
            stopping_region: self.stopping_region(&ctx.stopping_volume),
            track_count: ctx.track_count,
        };

        Ok(OutputRecord {
            event_index: ctx.event_index,
            summary,
            raw_hits: ctx.raw_hits,
            digits,
            windows,
        })
    }
}
