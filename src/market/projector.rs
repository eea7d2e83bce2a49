use super::types::{parse_number, NumericPoint, PriceRow};

impl NumericPoint {
    /// Parse one row. Midpoint is present only when both bid and ask are.
    pub fn from_row(row: &PriceRow) -> Self {
        let bid = parse_number(&row.bid);
        let ask = parse_number(&row.ask);
        let midpoint = match (bid, ask) {
            (Some(bid), Some(ask)) => Some((bid + ask) / 2.0),
            _ => None,
        };

        Self {
            bid,
            ask,
            midpoint,
            profit: parse_number(&row.profit),
        }
    }
}

/// Project filtered rows into numeric points, one per row, order kept
pub fn project_rows(rows: &[&PriceRow]) -> Vec<NumericPoint> {
    rows.iter().map(|row| NumericPoint::from_row(row)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row_projection() {
        let row = PriceRow::new("2024-01-01T00:00", "1.0", "2.0", "0.5");
        let points = project_rows(&[&row]);

        assert_eq!(
            points,
            vec![NumericPoint {
                bid: Some(1.0),
                ask: Some(2.0),
                midpoint: Some(1.5),
                profit: Some(0.5),
            }]
        );
    }

    #[test]
    fn test_unparseable_fields_propagate() {
        let row = PriceRow::new("2024-01-01T00:00", "x", "2.0", "n/a");
        let point = NumericPoint::from_row(&row);

        assert_eq!(point.bid, None);
        assert_eq!(point.ask, Some(2.0));
        assert_eq!(point.midpoint, None);
        assert_eq!(point.profit, None);
    }

    #[test]
    fn test_length_preserved() {
        let rows = vec![
            PriceRow::new("t1", "1", "2", "0"),
            PriceRow::new("t2", "bad", "bad", "bad"),
            PriceRow::new("t3", "3", "4", "1"),
        ];
        let refs: Vec<&PriceRow> = rows.iter().collect();
        let points = project_rows(&refs);

        assert_eq!(points.len(), rows.len());
        assert_eq!(points[2].midpoint, Some(3.5));
    }
}
