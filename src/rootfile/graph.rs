use crate::rootfile::DecodeError;
use crate::rootfile::ObjectMeta;
use crate::sheet::value::Value;

/// Error bars attached to a graph's points, one flavor per class.
#[derive(Clone, Debug)]
pub enum GraphErrors {
    /// Plain graph, no error bars
    None,
    /// Symmetric per-axis errors
    Symmetric { ex: Vec<f64>, ey: Vec<f64> },
    /// Independent low/high errors per axis
    Asymmetric {
        ex_low: Vec<f64>,
        ex_high: Vec<f64>,
        ey_low: Vec<f64>,
        ey_high: Vec<f64>,
    },
}

impl GraphErrors {
    /// ROOT class serialized for a graph with this error flavor.
    pub const fn class_name(&self) -> &'static str {
        match self {
            GraphErrors::None => "TGraph",
            GraphErrors::Symmetric { .. } => "TGraphErrors",
            GraphErrors::Asymmetric { .. } => "TGraphAsymmErrors",
        }
    }

    fn arrays(&self) -> Vec<&[f64]> {
        match self {
            GraphErrors::None => Vec::new(),
            GraphErrors::Symmetric { ex, ey } => vec![ex, ey],
            GraphErrors::Asymmetric {
                ex_low,
                ex_high,
                ey_low,
                ey_high,
            } => vec![ex_low, ex_high, ey_low, ey_high],
        }
    }
}

/// A decoded graph: an explicit list of `(x, y)` samples with optional
/// error bars.
#[derive(Clone, Debug)]
pub struct Graph {
    pub meta: ObjectMeta,
    x: Vec<f64>,
    y: Vec<f64>,
    errors: GraphErrors,
}

impl Graph {
    /// Creates a graph; all coordinate and error arrays must agree on the
    /// point count.
    pub fn new(
        name: &str,
        title: &str,
        x: Vec<f64>,
        y: Vec<f64>,
        errors: GraphErrors,
    ) -> Result<Self, DecodeError> {
        if y.len() != x.len() {
            return Err(DecodeError::Corrupt(format!(
                "graph '{}': expected {} y values, got {}",
                name,
                x.len(),
                y.len()
            )));
        }
        if errors.arrays().iter().any(|array| array.len() != x.len()) {
            return Err(DecodeError::Corrupt(format!(
                "graph '{}': error arrays must hold {} points",
                name,
                x.len()
            )));
        }
        let mut meta = ObjectMeta::new(errors.class_name(), name, title);
        meta.push_attr("fNpoints", Value::Int(x.len() as i64));
        Ok(Graph {
            meta,
            x,
            y,
            errors,
        })
    }

    pub fn n_points(&self) -> usize {
        self.x.len()
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn errors(&self) -> &GraphErrors {
        &self.errors
    }
}
