//! Per-edge route report.

use std::fmt;

use serde::Serialize;

use crate::distance::distance;
use crate::error::Result;
use crate::models::Tour;

/// One edge of a reported tour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    /// 0-based position of `city` in the tour.
    pub index: usize,
    /// City the edge leaves from.
    pub city: String,
    /// City the edge arrives at; the last row wraps to the first city.
    pub connection: String,
    /// Raw Euclidean edge length.
    pub distance: f64,
}

/// Table of every edge in a tour plus the tour total.
///
/// `Display` rounds distances to two decimals and labels the total in
/// miles; the rows keep raw values.
///
/// # Examples
///
/// ```
/// use swap_tour::io::RouteReport;
/// use swap_tour::models::{CityRecord, Tour};
///
/// let tour = Tour::new(vec![
///     CityRecord::new("A", "X", 0.0, 0.0),
///     CityRecord::new("B", "Y", 0.0, 3.0),
///     CityRecord::new("C", "Z", 4.0, 0.0),
/// ])
/// .unwrap();
/// let report = RouteReport::new(&tour).unwrap();
/// assert_eq!(report.rows().len(), 3);
/// assert_eq!(report.rows()[2].connection, "X");
/// assert!(report.to_string().ends_with("Total distance = 12.00 miles\n"));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct RouteReport {
    rows: Vec<ReportRow>,
    total_distance: f64,
}

impl RouteReport {
    /// Builds the report from the tour's edges.
    pub fn new(tour: &Tour) -> Result<Self> {
        let mut rows = Vec::with_capacity(tour.len());
        for (index, (from, to)) in tour.edges().enumerate() {
            rows.push(ReportRow {
                index,
                city: from.name().to_string(),
                connection: to.name().to_string(),
                distance: distance(from, to)?,
            });
        }
        let total_distance = rows.iter().map(|r| r.distance).sum();
        Ok(Self {
            rows,
            total_distance,
        })
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    /// Sum of all edge distances.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }
}

impl fmt::Display for RouteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let distances: Vec<String> = self.rows.iter().map(|r| format!("{:.2}", r.distance)).collect();
        let w_no = column_width("No.", self.rows.iter().map(|r| r.index.to_string().len()));
        let w_city = column_width("City", self.rows.iter().map(|r| r.city.len()));
        let w_conn = column_width("Connection", self.rows.iter().map(|r| r.connection.len()));
        let w_dist = column_width("Distance", distances.iter().map(String::len));

        writeln!(f, "Most efficient route found")?;
        writeln!(
            f,
            "{:<w_no$}  {:<w_city$}  {:<w_conn$}  {:>w_dist$}",
            "No.", "City", "Connection", "Distance"
        )?;
        for (row, dist) in self.rows.iter().zip(&distances) {
            writeln!(
                f,
                "{:<w_no$}  {:<w_city$}  {:<w_conn$}  {:>w_dist$}",
                row.index, row.city, row.connection, dist
            )?;
        }
        writeln!(f, "Total distance = {:.2} miles", self.total_distance)
    }
}

fn column_width(header: &str, cells: impl Iterator<Item = usize>) -> usize {
    cells.fold(header.len(), usize::max)
}
