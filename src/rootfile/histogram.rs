use crate::rootfile::DecodeError;
use crate::rootfile::ObjectMeta;
use crate::sheet::value::Value;

/// A binned axis described by its interior bin edges.
/// For `n` bins there are `n + 1` edges; flow bins sit outside them.
#[derive(Clone, Debug)]
pub struct Axis {
    n_bins: usize,
    edges: Vec<f64>,
}

impl Axis {
    /// Creates an axis with `n_bins` uniform bins over `[low, high]`.
    pub fn new(n_bins: usize, low: f64, high: f64) -> Self {
        let step = (high - low) / n_bins.max(1) as f64;
        let edges = (0..=n_bins).map(|i| low + step * i as f64).collect();
        Axis { n_bins, edges }
    }

    /// Creates an axis from explicit interior edges.
    pub fn from_edges(edges: Vec<f64>) -> Result<Self, DecodeError> {
        if edges.len() < 2 {
            return Err(DecodeError::Corrupt(format!(
                "axis: expected at least 2 bin edges, got {}",
                edges.len()
            )));
        }
        Ok(Axis {
            n_bins: edges.len() - 1,
            edges,
        })
    }

    /// Number of interior bins.
    pub fn n_bins(&self) -> usize {
        self.n_bins
    }

    /// Interior bin edges, `n_bins + 1` of them.
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }
}

/// A decoded 1-D histogram.
///
/// Bin contents are stored in the file's native layout: `n_bins + 2`
/// slots with underflow first and overflow last. `sumw2` holds per-bin
/// summed squared weights in the same layout when the histogram was
/// filled with weights. Accessors take a `flow` toggle and either slice
/// away or keep the flow slots, mirroring what the decoding library
/// exposes to its callers.
#[derive(Clone, Debug)]
pub struct Hist1d {
    pub meta: ObjectMeta,
    pub axis: Axis,
    heights: Vec<f64>,
    sumw2: Option<Vec<f64>>,
    pub entries: u64,
}

impl Hist1d {
    /// Creates a histogram from flow-inclusive bin contents.
    pub fn new(
        class_name: &str,
        name: &str,
        title: &str,
        axis: Axis,
        heights: Vec<f64>,
        sumw2: Option<Vec<f64>>,
        entries: u64,
    ) -> Result<Self, DecodeError> {
        let cells = axis.n_bins() + 2;
        if heights.len() != cells {
            return Err(DecodeError::Corrupt(format!(
                "histogram '{}': expected {} bin contents, got {}",
                name,
                cells,
                heights.len()
            )));
        }
        if let Some(sumw2) = &sumw2 {
            if sumw2.len() != cells {
                return Err(DecodeError::Corrupt(format!(
                    "histogram '{}': expected {} squared weights, got {}",
                    name,
                    cells,
                    sumw2.len()
                )));
            }
        }
        let mut meta = ObjectMeta::new(class_name, name, title);
        meta.push_attr("fEntries", Value::Int(entries as i64));
        meta.push_attr("fDimension", Value::Int(1));
        meta.push_attr("fNcells", Value::Int(cells as i64));
        Ok(Hist1d {
            meta,
            axis,
            heights,
            sumw2,
            entries,
        })
    }

    /// True if the histogram carries per-bin squared weights.
    pub fn weighted(&self) -> bool {
        self.sumw2.is_some()
    }

    /// Bin heights; with `flow` the underflow and overflow slots are kept.
    pub fn heights(&self, flow: bool) -> &[f64] {
        if flow {
            &self.heights
        } else {
            &self.heights[1..self.heights.len() - 1]
        }
    }

    /// Bin edges; with `flow` the edge list gains `-inf`/`+inf` endpoints
    /// so it stays one longer than the bin list.
    pub fn edges(&self, flow: bool) -> Vec<f64> {
        let interior = self.axis.edges();
        if flow {
            let mut edges = Vec::with_capacity(interior.len() + 2);
            edges.push(f64::NEG_INFINITY);
            edges.extend_from_slice(interior);
            edges.push(f64::INFINITY);
            edges
        } else {
            interior.to_vec()
        }
    }

    /// Per-bin variances: the squared weights when weighted, else the
    /// heights themselves.
    pub fn variances(&self, flow: bool) -> &[f64] {
        let variances = self.sumw2.as_deref().unwrap_or(&self.heights);
        if flow {
            variances
        } else {
            &variances[1..variances.len() - 1]
        }
    }

    /// Per-bin errors, `sqrt` of the variances.
    pub fn errors(&self, flow: bool) -> Vec<f64> {
        self.variances(flow).iter().map(|value| value.sqrt()).collect()
    }

    /// Effective per-bin entry counts: the heights when unweighted, else
    /// `height^2 / variance` with zero-variance bins reading as zero.
    pub fn counts(&self, flow: bool) -> Vec<f64> {
        let heights = self.heights(flow);
        if !self.weighted() {
            return heights.to_vec();
        }
        heights
            .iter()
            .zip(self.variances(flow))
            .map(|(height, variance)| {
                if *variance > 0.0 {
                    height * height / variance
                } else {
                    0.0
                }
            })
            .collect()
    }
}

/// A decoded 2-D histogram. Bin contents are stored flow-inclusive on
/// both axes, outer index along x.
#[derive(Clone, Debug)]
pub struct Hist2d {
    pub meta: ObjectMeta,
    pub x_axis: Axis,
    pub y_axis: Axis,
    heights: Vec<Vec<f64>>,
    pub entries: u64,
}

impl Hist2d {
    /// Creates a histogram from flow-inclusive bin contents,
    /// `(x_bins + 2) x (y_bins + 2)` of them.
    pub fn new(
        class_name: &str,
        name: &str,
        title: &str,
        x_axis: Axis,
        y_axis: Axis,
        heights: Vec<Vec<f64>>,
        entries: u64,
    ) -> Result<Self, DecodeError> {
        let x_cells = x_axis.n_bins() + 2;
        let y_cells = y_axis.n_bins() + 2;
        if heights.len() != x_cells {
            return Err(DecodeError::Corrupt(format!(
                "histogram '{}': expected {} x slices, got {}",
                name,
                x_cells,
                heights.len()
            )));
        }
        if let Some(row) = heights.iter().find(|row| row.len() != y_cells) {
            return Err(DecodeError::Corrupt(format!(
                "histogram '{}': expected {} bin contents per x slice, got {}",
                name,
                y_cells,
                row.len()
            )));
        }
        let mut meta = ObjectMeta::new(class_name, name, title);
        meta.push_attr("fEntries", Value::Int(entries as i64));
        meta.push_attr("fDimension", Value::Int(2));
        meta.push_attr("fNcells", Value::Int((x_cells * y_cells) as i64));
        Ok(Hist2d {
            meta,
            x_axis,
            y_axis,
            heights,
            entries,
        })
    }

    /// Bin heights by `[x][y]`; with `flow` the underflow and overflow
    /// slices of both axes are kept.
    pub fn heights(&self, flow: bool) -> Vec<Vec<f64>> {
        if flow {
            return self.heights.clone();
        }
        self.heights[1..self.heights.len() - 1]
            .iter()
            .map(|row| row[1..row.len() - 1].to_vec())
            .collect()
    }
}
