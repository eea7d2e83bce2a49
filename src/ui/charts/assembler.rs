use crate::market::{DepthBook, DepthLevel, MarketView, NumericPoint};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Bid,
    Ask,
    Midpoint,
    Profit,
}

impl SeriesKind {
    pub fn label(&self) -> &'static str {
        match self {
            SeriesKind::Bid => "Bid",
            SeriesKind::Ask => "Ask",
            SeriesKind::Midpoint => "Midpoint",
            SeriesKind::Profit => "Profit",
        }
    }
}

/// One labelled line. Absent values split the line into segments instead
/// of being drawn as zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub kind: SeriesKind,
    pub segments: Vec<Vec<[f64; 2]>>,
}

impl Series {
    fn from_values<I>(kind: SeriesKind, values: I) -> Self
    where
        I: IntoIterator<Item = Option<f64>>,
    {
        let mut segments = Vec::new();
        let mut current: Vec<[f64; 2]> = Vec::new();

        for (i, value) in values.into_iter().enumerate() {
            match value {
                Some(v) => current.push([i as f64, v]),
                None if !current.is_empty() => segments.push(std::mem::take(&mut current)),
                None => {}
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }

        Self { kind, segments }
    }

    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Vec::len).sum()
    }
}

/// Series over a row index axis, with the row labels for that axis
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub highlight: Option<[f64; 2]>,
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn label_at(&self, x: f64) -> Option<&str> {
        if x < 0.0 || x.fract() != 0.0 {
            return None;
        }
        self.labels.get(x as usize).map(String::as_str)
    }
}

/// Step curves for the depth chart, each starting at the midpoint
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DepthChartData {
    pub midpoint: Option<f64>,
    pub bids: Vec<[f64; 2]>,
    pub asks: Vec<[f64; 2]>,
}

impl DepthChartData {
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }
}

/// Shapes derived market data into plot-ready series
pub struct ChartDataAssembler;

impl ChartDataAssembler {
    pub fn price_chart(view: &MarketView) -> ChartData {
        let highlight = Self::highlight(view, |p| p.midpoint);
        ChartData {
            labels: Self::labels(view),
            series: vec![
                Series::from_values(SeriesKind::Bid, view.points.iter().map(|p| p.bid)),
                Series::from_values(SeriesKind::Ask, view.points.iter().map(|p| p.ask)),
                Series::from_values(SeriesKind::Midpoint, view.points.iter().map(|p| p.midpoint)),
            ],
            highlight,
        }
    }

    pub fn profit_chart(view: &MarketView) -> ChartData {
        let highlight = Self::highlight(view, |p| p.profit);
        ChartData {
            labels: Self::labels(view),
            series: vec![Series::from_values(
                SeriesKind::Profit,
                view.points.iter().map(|p| p.profit),
            )],
            highlight,
        }
    }

    pub fn depth_chart(book: &DepthBook) -> DepthChartData {
        let Some(midpoint) = book.midpoint.filter(|_| !book.is_empty()) else {
            return DepthChartData::default();
        };

        DepthChartData {
            midpoint: Some(midpoint),
            bids: Self::step_points(midpoint, book.bids.iter().rev()),
            asks: Self::step_points(midpoint, book.asks.iter()),
        }
    }

    fn labels(view: &MarketView) -> Vec<String> {
        view.rows.iter().map(|row| row.label()).collect()
    }

    /// Marker at the scrubbed index; nothing when the index is past the end
    /// of the filtered series or the value there is absent
    fn highlight<F>(view: &MarketView, value: F) -> Option<[f64; 2]>
    where
        F: Fn(&NumericPoint) -> Option<f64>,
    {
        view.selected_point()
            .and_then(value)
            .map(|v| [view.selected_index as f64, v])
    }

    /// Staircase from the midpoint outward; `levels` must be ordered nearest
    /// to the midpoint first
    fn step_points<'a, I>(midpoint: f64, levels: I) -> Vec<[f64; 2]>
    where
        I: Iterator<Item = &'a DepthLevel>,
    {
        let mut points = Vec::new();
        let mut previous = 0.0;
        for level in levels {
            if points.is_empty() {
                points.push([midpoint, 0.0]);
            }
            points.push([level.price, previous]);
            points.push([level.price, level.cumulative_volume]);
            previous = level.cumulative_volume;
        }
        points
    }
}
