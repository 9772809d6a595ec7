//! Argument shapes accepted by [`Session::res`](crate::Session::res).

use rw_core::NumberInput;

/// One element of an uncertainty list.
#[derive(Debug, Clone, PartialEq)]
pub enum UncertaintyEntry {
    Scalar(NumberInput),
    Labeled(NumberInput, String),
}

impl From<f64> for UncertaintyEntry {
    fn from(v: f64) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<&str> for UncertaintyEntry {
    fn from(s: &str) -> Self {
        Self::Scalar(s.into())
    }
}

impl From<String> for UncertaintyEntry {
    fn from(s: String) -> Self {
        Self::Scalar(s.into())
    }
}

impl<N, L> From<(N, L)> for UncertaintyEntry
where
    N: Into<NumberInput>,
    L: Into<String>,
{
    fn from((magnitude, label): (N, L)) -> Self {
        Self::Labeled(magnitude.into(), label.into())
    }
}

/// Every way a caller may describe the uncertainty of a result.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum UncertaintySpec {
    #[default]
    None,
    Scalar(NumberInput),
    Labeled(NumberInput, String),
    List(Vec<UncertaintyEntry>),
    /// Shorthand for two components labeled `sys` and `stat`.
    SysStat { sys: NumberInput, stat: NumberInput },
}

impl UncertaintySpec {
    pub fn sys_stat(sys: impl Into<NumberInput>, stat: impl Into<NumberInput>) -> Self {
        Self::SysStat {
            sys: sys.into(),
            stat: stat.into(),
        }
    }

    /// Flatten into list form, preserving order.
    pub fn into_entries(self) -> Vec<UncertaintyEntry> {
        match self {
            Self::None => Vec::new(),
            Self::Scalar(v) => vec![UncertaintyEntry::Scalar(v)],
            Self::Labeled(v, label) => vec![UncertaintyEntry::Labeled(v, label)],
            Self::List(entries) => entries,
            Self::SysStat { sys, stat } => vec![
                UncertaintyEntry::Labeled(sys, "sys".to_string()),
                UncertaintyEntry::Labeled(stat, "stat".to_string()),
            ],
        }
    }
}

impl From<f64> for UncertaintySpec {
    fn from(v: f64) -> Self {
        Self::Scalar(v.into())
    }
}

impl From<&str> for UncertaintySpec {
    fn from(s: &str) -> Self {
        Self::Scalar(s.into())
    }
}

impl<N, L> From<(N, L)> for UncertaintySpec
where
    N: Into<NumberInput>,
    L: Into<String>,
{
    fn from((magnitude, label): (N, L)) -> Self {
        Self::Labeled(magnitude.into(), label.into())
    }
}

impl<E> From<Vec<E>> for UncertaintySpec
where
    E: Into<UncertaintyEntry>,
{
    fn from(entries: Vec<E>) -> Self {
        Self::List(entries.into_iter().map(Into::into).collect())
    }
}

/// Raw, not yet validated arguments for one result.
///
/// `sigfigs` and `decimal_places` are signed so that out-of-range requests
/// reach validation and fail there with a range error.
#[derive(Debug, Clone, PartialEq)]
pub struct ResArgs {
    pub name: String,
    pub value: NumberInput,
    pub uncertainty: UncertaintySpec,
    pub unit: String,
    pub sigfigs: Option<i64>,
    pub decimal_places: Option<i64>,
}

impl ResArgs {
    pub fn new(name: impl Into<String>, value: impl Into<NumberInput>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            uncertainty: UncertaintySpec::None,
            unit: String::new(),
            sigfigs: None,
            decimal_places: None,
        }
    }

    pub fn uncert(mut self, spec: impl Into<UncertaintySpec>) -> Self {
        self.uncertainty = spec.into();
        self
    }

    pub fn sys_stat(mut self, sys: impl Into<NumberInput>, stat: impl Into<NumberInput>) -> Self {
        self.uncertainty = UncertaintySpec::sys_stat(sys, stat);
        self
    }

    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn sigfigs(mut self, sigfigs: i64) -> Self {
        self.sigfigs = Some(sigfigs);
        self
    }

    pub fn decimal_places(mut self, decimal_places: i64) -> Self {
        self.decimal_places = Some(decimal_places);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sys_stat_expands_to_labeled_pair() {
        let entries = UncertaintySpec::sys_stat(0.1, "0.2").into_entries();
        assert_eq!(
            entries,
            vec![
                UncertaintyEntry::Labeled(NumberInput::Float(0.1), "sys".into()),
                UncertaintyEntry::Labeled(NumberInput::Text("0.2".into()), "stat".into()),
            ]
        );
    }

    #[test]
    fn conversions_pick_the_right_shape() {
        assert_eq!(
            UncertaintySpec::from(0.5),
            UncertaintySpec::Scalar(NumberInput::Float(0.5))
        );
        assert_eq!(
            UncertaintySpec::from((0.5, "sys")),
            UncertaintySpec::Labeled(NumberInput::Float(0.5), "sys".into())
        );
        let mixed = UncertaintySpec::from(vec![
            UncertaintyEntry::from(0.1),
            UncertaintyEntry::from(("0.2", "stat")),
        ]);
        assert_eq!(mixed.into_entries().len(), 2);
        assert!(UncertaintySpec::None.into_entries().is_empty());
    }

    #[test]
    fn builder_sets_fields() {
        let args = ResArgs::new("g", 9.81)
            .uncert(0.02)
            .unit("m/s^2")
            .sigfigs(2)
            .decimal_places(1);
        assert_eq!(args.name, "g");
        assert_eq!(args.unit, "m/s^2");
        assert_eq!(args.sigfigs, Some(2));
        assert_eq!(args.decimal_places, Some(1));
    }
}
