//! Strategy construction from registry identities.

use crate::{
    AnisotropyConfig, AnisotropyTrigger, ItcRatioConfig, ItcRatioTrigger, LocalNHitsConfig,
    LocalNHitsTrigger, NDigitsConfig, NDigitsTrigger, NoTriggerPassthrough, RegionsConfig,
    RegionsTrigger, SkiConfig, SkiDigitizer,
};
use wcdaq_core::{Digitizer, DigitizerKind, Error, Result, Trigger, TriggerKind};

/// Algorithm parameters for every registered strategy.
///
/// The orchestrator carries one of these so that whichever pair of
/// algorithms the run selects finds its settings here.
#[derive(Clone, Debug, Default)]
pub struct DaqParams {
    /// SKI digitizer settings.
    pub ski: SkiConfig,
    /// NDigits (and test variant) settings.
    pub ndigits: NDigitsConfig,
    /// `Local_NHits` settings.
    pub local_nhits: LocalNHitsConfig,
    /// ITCRatio settings.
    pub itc_ratio: ItcRatioConfig,
    /// Regions settings.
    pub regions: RegionsConfig,
    /// Anisotropy settings.
    pub anisotropy: AnisotropyConfig,
}

/// Builds the digitizer strategy for a resolved identity.
///
/// # Errors
///
/// The `Undefined` sentinel has no strategy; building it is the fatal
/// configuration error the pipeline surfaces before any event is processed.
pub fn build_digitizer(kind: DigitizerKind, params: &DaqParams) -> Result<Box<dyn Digitizer>> {
    match kind {
        DigitizerKind::Ski => Ok(Box::new(SkiDigitizer::new(params.ski.clone()))),
        DigitizerKind::Undefined => Err(Error::Config(
            "cannot construct the undefined digitizer".into(),
        )),
    }
}

/// Builds the trigger strategy for a resolved identity.
///
/// # Errors
///
/// `Undefined` has no strategy, and `Failure` tags an outcome rather than a
/// selectable algorithm; both refuse construction.
pub fn build_trigger(kind: TriggerKind, params: &DaqParams) -> Result<Box<dyn Trigger>> {
    match kind {
        TriggerKind::NDigits => Ok(Box::new(NDigitsTrigger::new(params.ndigits.clone()))),
        TriggerKind::NDigitsTest => Ok(Box::new(NDigitsTrigger::parameter_study(
            params.ndigits.clone(),
        ))),
        TriggerKind::LocalNHits => {
            Ok(Box::new(LocalNHitsTrigger::new(params.local_nhits.clone())))
        }
        TriggerKind::ItcRatio => Ok(Box::new(ItcRatioTrigger::new(params.itc_ratio.clone()))),
        TriggerKind::Regions => Ok(Box::new(RegionsTrigger::new(params.regions.clone()))),
        TriggerKind::Anisotropy => Ok(Box::new(AnisotropyTrigger::new(params.anisotropy.clone()))),
        TriggerKind::NoTrigger => Ok(Box::new(NoTriggerPassthrough::new())),
        TriggerKind::Failure => Err(Error::UnselectableTrigger(TriggerKind::Failure.name())),
        TriggerKind::Undefined => {
            Err(Error::Config("cannot construct the undefined trigger".into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_selectable_trigger_builds() {
        let params = DaqParams::default();
        for kind in TriggerKind::MEMBERS {
            if kind == TriggerKind::Failure {
                continue;
            }
            let trigger = build_trigger(kind, &params).unwrap();
            assert_eq!(trigger.kind(), kind);
            assert_eq!(trigger.name(), kind.name());
        }
    }

    #[test]
    fn test_every_digitizer_builds() {
        let params = DaqParams::default();
        for kind in DigitizerKind::MEMBERS {
            let digitizer = build_digitizer(kind, &params).unwrap();
            assert_eq!(digitizer.kind(), kind);
        }
    }

    #[test]
    fn test_sentinels_refuse_construction() {
        let params = DaqParams::default();
        assert!(build_digitizer(DigitizerKind::Undefined, &params).is_err());
        assert!(build_trigger(TriggerKind::Undefined, &params).is_err());
        assert!(build_trigger(TriggerKind::Failure, &params).is_err());
    }
}
