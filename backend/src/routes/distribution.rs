// =========================================================
// Distribution types + routes
// =========================================================

/// Wire shapes are owned by the distribution core; they are exposed here
/// next to the paths that serve them.
pub use crate::distribution::report::{DistributionReport, DistributionRow};

/// Rows only, in display order.
pub const DISTRIBUTE: &str = "/Distribucion/{colegio_id}/distribuir/{cantidad}";
/// Rows plus requested/assigned/residual totals.
pub const DISTRIBUTION_SUMMARY: &str = "/Distribucion/{colegio_id}/resumen/{cantidad}";
/// Response header carrying the residual on [`DISTRIBUTE`].
pub const RESIDUAL_HEADER: &str = "x-distribution-residual";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SchoolId;

    #[test]
    fn test_row_uses_frontend_field_names() {
        let row = DistributionRow {
            curso_name: "Primero".to_string(),
            salon_name: "A".to_string(),
            cantidad_asignada: 8,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["cursoName"], "Primero");
        assert_eq!(json["salonName"], "A");
        assert_eq!(json["cantidadAsignada"], 8);
    }

    #[test]
    fn test_report_field_names() {
        let report = DistributionReport {
            colegio_id: SchoolId::new(4),
            cantidad_solicitada: 25,
            cantidad_asignada: 20,
            residual: 5,
            completa: false,
            asignaciones: vec![],
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["colegioId"], 4);
        assert_eq!(json["cantidadSolicitada"], 25);
        assert_eq!(json["cantidadAsignada"], 20);
        assert_eq!(json["residual"], 5);
        assert_eq!(json["completa"], false);
        assert!(json["asignaciones"].as_array().unwrap().is_empty());
    }
}
