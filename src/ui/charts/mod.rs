mod assembler;
mod renderer;

pub use assembler::{ChartData, ChartDataAssembler, DepthChartData, Series, SeriesKind};
pub use renderer::ChartRenderer;
