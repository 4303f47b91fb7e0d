mod common;

use chrono::NaiveDate;
use common::*;
use rgiras::core::stats::{
    AsistenciaStats, DashboardFilter, DashboardSummary, GastoStats, GiraStats, IncidenciaStats,
    UsuarioStats,
};
use rgiras::models::gasto::TipoGasto;

#[test]
fn gira_stats_count_and_sum() {
    let giras = vec![
        gira("g1", "u1", "Instalación", "Pendiente", true, "2025-03-03", 1200.0, 0.0),
        gira("g2", "u2", "Mantenimiento", "Completada", false, "2025-02-10", 800.5, 50.0),
        gira("g3", "u1", "Visita", "Completada", true, "2025-03-10", 0.0, 25.0),
    ];

    let s = GiraStats::compute(&giras);
    assert_eq!(s.total, 3);
    assert_eq!(s.activas, 2);
    assert_eq!(s.completadas, 2);
    assert!((s.monto_total_soles - 2000.5).abs() < 1e-9);
    assert!((s.monto_total_dolares - 75.0).abs() < 1e-9);
}

#[test]
fn gasto_stats_split_by_currency_and_category() {
    let gastos = vec![
        gasto("e1", "g1", "viatico", "Alimentación", 45.0, "PEN", "2025-03-03", true),
        gasto("e2", "g1", "compra", "", 120.0, "USD", "2025-03-04", false),
        gasto("e3", "g1", "viatico", "Alimentación", 30.0, "PEN", "2025-03-05", false),
    ];

    let s = GastoStats::compute(&gastos);
    assert_eq!(s.total, 3);
    assert_eq!(s.viaticos, 2);
    assert_eq!(s.compras, 1);
    assert!((s.total_pen - 75.0).abs() < 1e-9);
    assert!((s.total_usd - 120.0).abs() < 1e-9);
    assert_eq!(s.sin_sustento, 2);
    assert_eq!(s.por_categoria.get("Alimentación"), Some(&75.0));
    // blank categories are grouped as "Otros"
    assert_eq!(s.por_categoria.get("Otros"), Some(&120.0));
}

#[test]
fn usuario_stats_active_and_inactive() {
    let usuarios = vec![
        usuario("u1", "Ana", "Quispe", true, &["Ventas"]),
        usuario("u2", "Luis", "Torres", false, &[]),
        usuario("u3", "Rosa", "Huamán", true, &["Sistemas"]),
    ];
    let s = UsuarioStats::compute(&usuarios);
    assert_eq!((s.total, s.activos, s.inactivos), (3, 2, 1));
}

#[test]
fn asistencia_stats_track_validity_and_open_records() {
    let sede = sede_json("s1", -12.0464, -77.0428, 50.0);
    let list = vec![
        asistencia(asistencia_json("a1", "Carlos", sede.clone(), (-12.0464, -77.0429), None, true, None)),
        asistencia(asistencia_json(
            "a2",
            "María",
            sede.clone(),
            (-12.0464, -77.0428),
            Some((-12.0464, -77.0428)),
            true,
            Some(true),
        )),
        asistencia(asistencia_json("a3", "Jorge", sede, (-12.0600, -77.0428), None, false, None)),
    ];

    let s = AsistenciaStats::compute(&list);
    assert_eq!(s.total, 3);
    assert_eq!(s.validas, 2);
    assert_eq!(s.invalidas, 1);
    assert_eq!(s.en_curso, 1);
    assert!((s.horas_totales - 9.0).abs() < 1e-9);
}

#[test]
fn incidencia_stats_keep_server_total() {
    let list = vec![
        incidencia("i1", "Fuga", "Almacén A", "Crítico", "Pendiente", "2025-03-05"),
        incidencia("i2", "Corte", "Almacén B", "Bajo", "En Revisión", "2025-03-04"),
        incidencia("i3", "Caída", "Almacén B", "Crítico", "Resuelto", "2025-03-01"),
    ];
    let s = IncidenciaStats::compute(42, &list);
    assert_eq!(s.total, 42);
    assert_eq!(s.pendientes, 1);
    assert_eq!(s.en_revision, 1);
    assert_eq!(s.resueltos, 1);
    assert_eq!(s.criticos, 2);
}

fn dashboard_data() -> (
    Vec<rgiras::models::usuario::Usuario>,
    Vec<rgiras::models::gira::Gira>,
    Vec<rgiras::models::gasto::Gasto>,
) {
    let usuarios = vec![
        usuario("u1", "Ana", "Quispe", true, &["Ventas"]),
        usuario("u2", "Luis", "Torres", true, &["Sistemas"]),
        usuario("u3", "Rosa", "Huamán", false, &[]),
    ];
    let giras = vec![
        gira("g1", "u1", "Instalación", "En Proceso", true, "2025-02-20", 0.0, 0.0),
        gira("g2", "u2", "Soporte", "Completada", false, "2025-03-01", 0.0, 0.0),
    ];
    let gastos = vec![
        gasto("e1", "g1", "viatico", "Alimentación", 40.0, "PEN", "2025-02-21", true),
        gasto("e2", "g1", "compra", "Materiales", 200.0, "PEN", "2025-03-02", false),
        gasto("e3", "g2", "viatico", "Transporte", 60.0, "USD", "2025-03-03", true),
    ];
    (usuarios, giras, gastos)
}

#[test]
fn dashboard_without_filter_rolls_up_everything() {
    let (usuarios, giras, gastos) = dashboard_data();
    let d = DashboardSummary::compute(&usuarios, &giras, &gastos, &DashboardFilter::default());

    assert_eq!(d.usuarios_activos, 2);
    assert_eq!(d.giras_activas, 1);
    assert_eq!(d.gastos_registrados, 3);
    assert!((d.monto_total_pen - 240.0).abs() < 1e-9);
    assert!((d.monto_total_usd - 60.0).abs() < 1e-9);
    assert_eq!(d.gastos_sin_sustento, 1);

    let viatico = &d.por_tipo[0];
    assert_eq!(viatico.tipo, TipoGasto::Viatico);
    assert_eq!(viatico.cantidad, 2);
    assert_eq!(viatico.porcentaje, 66.7);
    assert_eq!(d.por_tipo[1].porcentaje, 33.3);

    let meses: Vec<&str> = d.tendencia.iter().map(|m| m.mes.as_str()).collect();
    assert_eq!(meses, ["2025-02", "2025-03"]);
    assert!((d.tendencia[1].compras - 200.0).abs() < 1e-9);
    assert!((d.tendencia[1].viaticos - 60.0).abs() < 1e-9);
}

#[test]
fn dashboard_filters_by_user_and_dates() {
    let (usuarios, giras, gastos) = dashboard_data();
    let filter = DashboardFilter {
        usuario: Some("u1".into()),
        desde: NaiveDate::from_ymd_opt(2025, 3, 1),
        ..DashboardFilter::default()
    };
    let d = DashboardSummary::compute(&usuarios, &giras, &gastos, &filter);

    assert_eq!(d.usuarios_activos, 1);
    assert_eq!(d.gastos_registrados, 1);
    assert_eq!(d.por_tipo[1].cantidad, 1);
    assert_eq!(d.por_tipo[1].porcentaje, 100.0);
    assert_eq!(d.por_tipo[0].porcentaje, 0.0);
}

#[test]
fn dashboard_with_no_expenses_has_zero_percentages() {
    let (usuarios, giras, _) = dashboard_data();
    let d = DashboardSummary::compute(&usuarios, &giras, &[], &DashboardFilter::default());
    assert_eq!(d.gastos_registrados, 0);
    assert!(d.por_tipo.iter().all(|t| t.porcentaje == 0.0));
    assert!(d.tendencia.is_empty());
}
