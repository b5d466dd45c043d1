//! Navigation model: which sidebar/dropdown choice renders which content.
//!
//! A [`NavState`] holds the top-level section plus both sub-selections.
//! The sub-selections are independent fields rather than a nested enum so
//! that a topic chosen under Dataset survives a detour through Modelling
//! and never influences it. [`NavState::resolve`] maps the state to the
//! single content branch to render; it is total and deterministic over the
//! finite selection domain, with no side effects.

/// Top-level sidebar section. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    About,
    Dataset,
    Modelling,
    Collaborators,
}

impl Section {
    /// All sections in sidebar order.
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Dataset,
        Section::Modelling,
        Section::Collaborators,
    ];

    /// Sidebar label.
    pub fn label(&self) -> &'static str {
        match self {
            Section::About => "About the Project",
            Section::Dataset => "Dataset",
            Section::Modelling => "Modelling",
            Section::Collaborators => "Collaborators",
        }
    }

    /// Inverse of [`label`](Self::label), for radio-control change events.
    pub fn from_label(label: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Sub-topic dropdown under the Dataset section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasetTopic {
    #[default]
    Introduction,
    Eto,
    CropWaterNeed,
    IrrigationWaterNeed,
}

impl DatasetTopic {
    pub const ALL: [DatasetTopic; 4] = [
        DatasetTopic::Introduction,
        DatasetTopic::Eto,
        DatasetTopic::CropWaterNeed,
        DatasetTopic::IrrigationWaterNeed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DatasetTopic::Introduction => "Introduction",
            DatasetTopic::Eto => "ETo",
            DatasetTopic::CropWaterNeed => "Crop Water Need (ETcrop)",
            DatasetTopic::IrrigationWaterNeed => "Irrigation Water Need",
        }
    }

    pub fn from_label(label: &str) -> Option<DatasetTopic> {
        DatasetTopic::ALL.into_iter().find(|t| t.label() == label)
    }
}

/// Prediction-interval dropdown under the Modelling section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForecastInterval {
    #[default]
    Overall,
    Daily,
    Weekly,
    Monthly,
}

impl ForecastInterval {
    pub const ALL: [ForecastInterval; 4] = [
        ForecastInterval::Overall,
        ForecastInterval::Daily,
        ForecastInterval::Weekly,
        ForecastInterval::Monthly,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ForecastInterval::Overall => "Overall Process",
            ForecastInterval::Daily => "Daily",
            ForecastInterval::Weekly => "Weekly",
            ForecastInterval::Monthly => "Monthly",
        }
    }

    pub fn from_label(label: &str) -> Option<ForecastInterval> {
        ForecastInterval::ALL.into_iter().find(|i| i.label() == label)
    }
}

/// The full selection state driving one render pass.
///
/// Defaults give the first-load view: About section, Introduction topic,
/// Overall interval. Every state is terminal until the next user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub section: Section,
    pub dataset_topic: DatasetTopic,
    pub interval: ForecastInterval,
}

/// The single content branch a selection resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    About,
    DatasetIntroduction,
    DatasetEto,
    DatasetCropWaterNeed,
    DatasetIrrigationWaterNeed,
    Modelling(ForecastInterval),
    Collaborators,
}

impl NavState {
    /// Resolve the current selection to its content branch.
    ///
    /// Sub-selections only matter within their parent section; the
    /// dataset topic is ignored under Modelling and vice versa.
    pub fn resolve(&self) -> Branch {
        match self.section {
            Section::About => Branch::About,
            Section::Collaborators => Branch::Collaborators,
            Section::Modelling => Branch::Modelling(self.interval),
            Section::Dataset => match self.dataset_topic {
                DatasetTopic::Introduction => Branch::DatasetIntroduction,
                DatasetTopic::Eto => Branch::DatasetEto,
                DatasetTopic::CropWaterNeed => Branch::DatasetCropWaterNeed,
                DatasetTopic::IrrigationWaterNeed => Branch::DatasetIrrigationWaterNeed,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_selection_resolves_to_exactly_one_branch() {
        for section in Section::ALL {
            for dataset_topic in DatasetTopic::ALL {
                for interval in ForecastInterval::ALL {
                    let state = NavState {
                        section,
                        dataset_topic,
                        interval,
                    };
                    // Total: no panic. Deterministic: same state, same branch.
                    assert_eq!(state.resolve(), state.resolve());
                }
            }
        }
    }

    #[test]
    fn dataset_topics_map_to_distinct_branches() {
        let branches: Vec<Branch> = DatasetTopic::ALL
            .into_iter()
            .map(|t| {
                NavState {
                    section: Section::Dataset,
                    dataset_topic: t,
                    ..Default::default()
                }
                .resolve()
            })
            .collect();
        for (i, a) in branches.iter().enumerate() {
            for b in &branches[i + 1..] {
                assert_ne!(a, b, "Each topic gets its own branch");
            }
        }
    }

    #[test]
    fn sub_selection_is_inert_outside_its_section() {
        let base = NavState {
            section: Section::Modelling,
            interval: ForecastInterval::Monthly,
            ..Default::default()
        };
        let with_topic = NavState {
            dataset_topic: DatasetTopic::Eto,
            ..base
        };
        assert_eq!(
            base.resolve(),
            with_topic.resolve(),
            "A Dataset topic must not affect the Modelling branch"
        );
    }

    #[test]
    fn topic_survives_section_round_trip() {
        // About -> Dataset(ETo) -> Collaborators -> Dataset keeps ETo.
        let mut state = NavState::default();
        state.section = Section::Dataset;
        state.dataset_topic = DatasetTopic::Eto;
        state.section = Section::Collaborators;
        state.section = Section::Dataset;
        assert_eq!(state.resolve(), Branch::DatasetEto);
    }

    #[test]
    fn first_load_defaults() {
        let state = NavState::default();
        assert_eq!(state.resolve(), Branch::About);
        assert_eq!(state.dataset_topic, DatasetTopic::Introduction);
        assert_eq!(state.interval, ForecastInterval::Overall);
    }

    #[test]
    fn labels_round_trip() {
        for s in Section::ALL {
            assert_eq!(Section::from_label(s.label()), Some(s));
        }
        for t in DatasetTopic::ALL {
            assert_eq!(DatasetTopic::from_label(t.label()), Some(t));
        }
        for i in ForecastInterval::ALL {
            assert_eq!(ForecastInterval::from_label(i.label()), Some(i));
        }
        assert_eq!(Section::from_label("Nonsense"), None);
    }
}
