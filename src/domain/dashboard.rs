// Dashboard domain model - chart-ready views of the aggregates
use super::aggregate::AggregateSeries;
use super::warning::parse_feed_time;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Area,
    Line,
    Arc,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    pub count: usize,
}

impl ChartPoint {
    pub fn new(label: String, series: Option<String>, count: usize) -> Self {
        Self {
            label,
            series,
            count,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    pub id: String,
    pub title: String,
    pub kind: ChartKind,
    pub points: Vec<ChartPoint>,
}

impl ChartData {
    pub fn new(id: &str, title: &str, kind: ChartKind, points: Vec<ChartPoint>) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            kind,
            points,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub charts: Vec<ChartData>,
}

impl Dashboard {
    pub fn from_aggregates(series: &AggregateSeries) -> Self {
        let mut typology: Vec<ChartPoint> = series
            .by_type_and_time
            .iter()
            .map(|((kind, start), count)| ChartPoint::new(start.clone(), Some(kind.clone()), count))
            .collect();
        sort_by_time(&mut typology);

        let mut over_time: Vec<ChartPoint> = series
            .by_time
            .iter()
            .map(|(start, count)| ChartPoint::new(start.clone(), None, count))
            .collect();
        sort_by_time(&mut over_time);

        let by_level = series
            .by_level
            .iter()
            .map(|(level, count)| ChartPoint::new(level.clone(), None, count))
            .collect();

        Self {
            charts: vec![
                ChartData::new("typology", "Tipologia de Aviso", ChartKind::Area, typology),
                ChartData::new("over_time", "Alerts Over Time", ChartKind::Line, over_time),
                ChartData::new("by_level", "Alerts by Level", ChartKind::Arc, by_level),
            ],
        }
    }
}

/// Order points along the time axis; labels that don't parse keep their
/// relative order at the end.
fn sort_by_time(points: &mut [ChartPoint]) {
    points.sort_by_key(|p| match parse_feed_time(&p.label) {
        Some(t) => (false, Some(t)),
        None => (true, None),
    });
}
