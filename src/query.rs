//! Parameterized aggregate queries for the compliance reports.
//!
//! Filter values only ever reach the store as bound `?` parameters. The SQL
//! text produced here depends solely on which filters are present, never on
//! their contents.

use serde::{Deserialize, Deserializer};

/// Optional narrowing applied to a compliance report.
///
/// Values are kept as the caller sent them and handed to the store through
/// bound parameters, so the store performs any coercion. Empty strings count
/// as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub area_id: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub brand_id: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub date_from: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub date_to: Option<String>,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.is_empty()))
}

/// How report rows are grouped. Each grouping also fixes the rounding of
/// the percentage column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grouping {
    /// One row per store area, percentage rounded to one decimal place.
    Area,
    /// One row per (brand, area) pair, percentage rounded to a whole number.
    /// The brand filter is not applied for this grouping.
    BrandArea,
}

impl Grouping {
    pub fn precision(self) -> u32 {
        match self {
            Grouping::Area => 1,
            Grouping::BrandArea => 0,
        }
    }

    fn select_list(self) -> &'static str {
        match self {
            Grouping::Area => "sa.area_name",
            Grouping::BrandArea => "b.brand_name, sa.area_name",
        }
    }

    fn percentage_type(self) -> &'static str {
        match self {
            Grouping::Area => "DOUBLE",
            Grouping::BrandArea => "SIGNED",
        }
    }

    fn group_by(self) -> &'static str {
        match self {
            Grouping::Area => "sa.area_id, sa.area_name",
            Grouping::BrandArea => "b.brand_id, b.brand_name, sa.area_id, sa.area_name",
        }
    }

    fn order_by(self) -> &'static str {
        match self {
            Grouping::Area => "sa.area_name",
            Grouping::BrandArea => "b.brand_name, sa.area_name",
        }
    }
}

/// SQL text plus the values to bind, in placeholder order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportQuery {
    pub sql: String,
    pub binds: Vec<String>,
}

const COMPLIANT_COUNT: &str = "SUM(CASE WHEN rp.compliance = TRUE THEN 1 ELSE 0 END)";

impl ReportQuery {
    pub fn compliance(grouping: Grouping, filter: &ReportFilter) -> Self {
        let mut sql = format!(
            "SELECT {select}, \
             COUNT(rp.report_id) AS total_reports, \
             CAST({compliant} AS SIGNED) AS compliant_reports, \
             CAST(ROUND({compliant} / NULLIF(COUNT(rp.report_id), 0) * 100, {precision}) AS {ty}) \
             AS compliance_percentage \
             FROM report_product rp \
             JOIN store s ON rp.store_id = s.store_id \
             JOIN store_area sa ON s.area_id = sa.area_id \
             JOIN product p ON rp.product_id = p.product_id",
            select = grouping.select_list(),
            compliant = COMPLIANT_COUNT,
            precision = grouping.precision(),
            ty = grouping.percentage_type(),
        );

        if grouping == Grouping::BrandArea {
            sql.push_str(" JOIN product_brand b ON p.brand_id = b.brand_id");
        }

        sql.push_str(" WHERE 1=1");

        let mut binds = Vec::new();
        let mut push = |clause: &str, value: &Option<String>| {
            if let Some(value) = value {
                sql.push_str(clause);
                binds.push(value.clone());
            }
        };

        push(" AND sa.area_id = ?", &filter.area_id);
        push(" AND rp.tanggal >= ?", &filter.date_from);
        push(" AND rp.tanggal <= ?", &filter.date_to);
        if grouping == Grouping::Area {
            push(" AND p.brand_id = ?", &filter.brand_id);
        }

        sql.push_str(" GROUP BY ");
        sql.push_str(grouping.group_by());
        sql.push_str(" ORDER BY ");
        sql.push_str(grouping.order_by());

        Self { sql, binds }
    }

    #[cfg(test)]
    fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }
}
