mod common;

use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use common::*;
use rgiras::core::filters::{
    AsistenciaFilter, DateWindow, Filter, GastoFilter, GiraFilter, IncidenciaFilter,
    SedeFilter, UsuarioFilter, ValidityScope, contains_ci, sedes_of,
};
use rgiras::models::gasto::{Moneda, TipoGasto};
use rgiras::models::gira::GiraEstado;
use rgiras::models::incidencia::{IncidenciaEstado, Severidad};

fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn giras() -> Vec<rgiras::models::gira::Gira> {
    vec![
        gira("g1", "u1", "Instalación de tablero", "Pendiente", true, "2025-03-03", 1200.0, 0.0),
        gira("g2", "u2", "Mantenimiento preventivo", "Completada", false, "2025-02-10", 800.0, 50.0),
        gira("g3", "u1", "Visita comercial", "En Proceso", true, "2025-03-10", 300.0, 0.0),
    ]
}

#[test]
fn contains_ci_ignores_case_and_matches_empty() {
    assert!(contains_ci("Mantenimiento Preventivo", "preventivo"));
    assert!(contains_ci("anything", ""));
    assert!(!contains_ci("Lima", "cusco"));
}

#[test]
fn empty_gira_filter_matches_all() {
    let all = giras();
    assert_eq!(GiraFilter::default().apply(&all).len(), 3);
}

#[test]
fn unmatched_search_yields_nothing() {
    let all = giras();
    let f = GiraFilter {
        search: "zzz-no-match".into(),
        ..GiraFilter::default()
    };
    assert!(f.apply(&all).is_empty());
}

#[test]
fn combined_gira_filters_are_an_and() {
    let all = giras();

    let by_search = GiraFilter {
        search: "visita".into(),
        ..GiraFilter::default()
    };
    let by_estado = GiraFilter {
        estado: Some(GiraEstado::EnProceso),
        ..GiraFilter::default()
    };
    let both = GiraFilter {
        search: "visita".into(),
        estado: Some(GiraEstado::EnProceso),
        ..GiraFilter::default()
    };
    let contradictory = GiraFilter {
        search: "visita".into(),
        estado: Some(GiraEstado::Completada),
        ..GiraFilter::default()
    };

    for g in &all {
        assert_eq!(both.matches(g), by_search.matches(g) && by_estado.matches(g));
    }
    assert_eq!(both.apply(&all).len(), 1);
    assert!(contradictory.apply(&all).is_empty());
}

#[test]
fn gira_search_looks_at_user_and_place() {
    let all = giras();
    let f = GiraFilter {
        search: "quispe".into(),
        ..GiraFilter::default()
    };
    assert_eq!(f.apply(&all).len(), 3);

    let f = GiraFilter {
        search: "arequipa".into(),
        ..GiraFilter::default()
    };
    assert_eq!(f.apply(&all).len(), 3);
}

#[test]
fn gasto_filter_by_type_currency_and_ruc() {
    let gastos = vec![
        gasto("e1", "g1", "viatico", "Alimentación", 45.0, "PEN", "2025-03-03", true),
        gasto("e2", "g1", "compra", "Otros", 120.0, "USD", "2025-03-04", false),
        gasto("e3", "g1", "viatico", "Transporte", 30.0, "PEN", "2025-03-05", true),
    ];

    let f = GastoFilter {
        tipo: Some(TipoGasto::Viatico),
        moneda: Some(Moneda::Pen),
        ..GastoFilter::default()
    };
    let ids: Vec<&str> = f.apply(&gastos).iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["e1", "e3"]);

    let f = GastoFilter {
        search: "2012345".into(),
        ..GastoFilter::default()
    };
    assert_eq!(f.apply(&gastos).len(), 3);

    let f = GastoFilter {
        categoria: Some("Transporte".into()),
        ..GastoFilter::default()
    };
    assert_eq!(f.apply(&gastos).len(), 1);
}

#[test]
fn usuario_filter_by_state_and_area() {
    let usuarios = vec![
        usuario("u1", "Ana", "Quispe", true, &["Ventas", "Marketing"]),
        usuario("u2", "Luis", "Torres", false, &["Sistemas"]),
        usuario("u3", "Rosa", "Huamán", true, &["Sistemas"]),
    ];

    let f = UsuarioFilter {
        active: Some(true),
        area: Some("Sistemas".into()),
        ..UsuarioFilter::default()
    };
    let ids: Vec<&str> = f.apply(&usuarios).iter().map(|u| u.id.as_str()).collect();
    assert_eq!(ids, ["u3"]);

    let f = UsuarioFilter {
        search: "luis@".into(),
        ..UsuarioFilter::default()
    };
    assert_eq!(f.apply(&usuarios).len(), 1);
}

#[test]
fn asistencia_filter_by_validity_and_site() {
    let sede_a = sede_json("s1", -12.0464, -77.0428, 50.0);
    let sede_b = sede_json("s2", -12.1211, -77.0297, 100.0);
    let list = vec![
        asistencia(asistencia_json("a1", "Carlos", sede_a.clone(), (-12.0464, -77.0429), None, true, None)),
        asistencia(asistencia_json("a2", "María", sede_a, (-12.0500, -77.0428), None, false, None)),
        asistencia(asistencia_json(
            "a3",
            "Jorge",
            sede_b,
            (-12.1211, -77.0297),
            Some((-12.1300, -77.0297)),
            true,
            Some(false),
        )),
    ];

    let validas = AsistenciaFilter {
        estado: ValidityScope::Validas,
        ..AsistenciaFilter::default()
    };
    let ids: Vec<&str> = validas.apply(&list).iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a1"]);

    let invalidas = AsistenciaFilter {
        estado: ValidityScope::Invalidas,
        ..AsistenciaFilter::default()
    };
    assert_eq!(invalidas.apply(&list).len(), 2);

    let en_s1 = AsistenciaFilter {
        sede: Some("s1".into()),
        search: "mar".into(),
        ..AsistenciaFilter::default()
    };
    let ids: Vec<&str> = en_s1.apply(&list).iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["a2"]);

    let sedes: Vec<&str> = sedes_of(&list).iter().map(|s| s.id.as_str()).collect();
    assert_eq!(sedes, ["s1", "s2"]);
}

#[test]
fn validity_scope_parses_spanish_and_english() {
    assert_eq!(ValidityScope::parse("válidas"), Some(ValidityScope::Validas));
    assert_eq!(ValidityScope::parse("INVALID"), Some(ValidityScope::Invalidas));
    assert_eq!(ValidityScope::parse("todos"), Some(ValidityScope::Todos));
    assert_eq!(ValidityScope::parse("quizás"), None);
}

#[test]
fn date_windows_are_inclusive_and_relative_to_today() {
    let today = day("2025-03-05"); // Wednesday

    assert!(DateWindow::Hoy.contains(today, today));
    assert!(!DateWindow::Hoy.contains(day("2025-03-04"), today));

    // ISO week: Monday 3rd to Sunday 9th
    assert!(DateWindow::Semana.contains(day("2025-03-03"), today));
    assert!(DateWindow::Semana.contains(day("2025-03-09"), today));
    assert!(!DateWindow::Semana.contains(day("2025-03-02"), today));

    assert!(DateWindow::Mes.contains(day("2025-03-31"), today));
    assert!(!DateWindow::Mes.contains(day("2025-04-01"), today));

    let r = DateWindow::Rango(day("2025-01-10"), day("2025-01-20"));
    assert!(r.contains(day("2025-01-10"), today));
    assert!(r.contains(day("2025-01-20"), today));
    assert!(!r.contains(day("2025-01-21"), today));
}

#[test]
fn date_window_from_args() {
    assert_eq!(DateWindow::from_args(None, None, None).unwrap(), DateWindow::Todas);
    assert_eq!(DateWindow::from_args(Some("semana"), None, None).unwrap(), DateWindow::Semana);
    assert_eq!(
        DateWindow::from_args(Some("rango"), Some(day("2025-01-01")), Some(day("2025-01-31"))).unwrap(),
        DateWindow::Rango(day("2025-01-01"), day("2025-01-31"))
    );
    assert!(DateWindow::from_args(Some("rango"), Some(day("2025-01-01")), None).is_err());
    assert!(DateWindow::from_args(Some("ayer"), None, None).is_err());
}

#[test]
fn incidencia_filter_combines_all_predicates() {
    let list = vec![
        incidencia("i1", "Fuga de agua", "Almacén A", "Alto", "Pendiente", "2025-03-05"),
        incidencia("i2", "Corte eléctrico", "Almacén A", "Crítico", "En Revisión", "2025-03-04"),
        incidencia("i3", "Fuga de gas", "Planta de Producción", "Crítico", "Pendiente", "2025-02-01"),
    ];
    let today = day("2025-03-05");

    let mut f = IncidenciaFilter::in_zone(today, Utc);
    assert_eq!(f.apply(&list).len(), 3);

    f.search = "sector 4".into();
    assert_eq!(f.apply(&list).len(), 3);

    f.fecha = DateWindow::Mes;
    let ids: Vec<&str> = f.apply(&list).iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["i1", "i2"]);

    f.search = "eléctrico".into();
    let ids: Vec<&str> = f.apply(&list).iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["i2"]);

    let mut f = IncidenciaFilter::in_zone(today, Utc);
    f.severidad = Some(Severidad::Critico);
    f.estado = Some(IncidenciaEstado::Pendiente);
    let ids: Vec<&str> = f.apply(&list).iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, ["i3"]);

    let mut f = IncidenciaFilter::in_zone(today, Utc);
    f.area = Some("Almacén A".into());
    f.fecha = DateWindow::Hoy;
    assert_eq!(f.apply(&list).len(), 1);
}

#[test]
fn evening_incident_counts_for_its_local_day() {
    let lima = FixedOffset::west_opt(5 * 3600).unwrap();
    let mut late = incidencia("i1", "Fuga de agua", "Almacén A", "Alto", "Pendiente", "2025-03-10");
    late.fecha = Utc.with_ymd_and_hms(2025, 3, 10, 2, 30, 0).unwrap();
    let list = vec![late];

    let mut f = IncidenciaFilter::in_zone(day("2025-03-09"), lima);
    f.fecha = DateWindow::Hoy;
    assert_eq!(f.apply(&list).len(), 1);

    let mut f = IncidenciaFilter::in_zone(day("2025-03-10"), lima);
    f.fecha = DateWindow::Hoy;
    assert!(f.apply(&list).is_empty());

    let mut f = IncidenciaFilter::in_zone(day("2025-03-10"), Utc);
    f.fecha = DateWindow::Hoy;
    assert_eq!(f.apply(&list).len(), 1);
}

#[test]
fn month_window_uses_the_local_month() {
    let lima = FixedOffset::west_opt(5 * 3600).unwrap();
    let mut early = incidencia("i1", "Fuga de agua", "Almacén A", "Alto", "Pendiente", "2025-04-01");
    early.fecha = Utc.with_ymd_and_hms(2025, 4, 1, 3, 0, 0).unwrap();
    let list = vec![early];

    let mut f = IncidenciaFilter::in_zone(day("2025-03-20"), lima);
    f.fecha = DateWindow::Mes;
    assert_eq!(f.apply(&list).len(), 1);

    let mut f = IncidenciaFilter::in_zone(day("2025-04-15"), lima);
    f.fecha = DateWindow::Mes;
    assert!(f.apply(&list).is_empty());
}

#[test]
fn sede_filter_matches_name_or_address() {
    let mut lima: rgiras::models::sede::Sede =
        serde_json::from_value(sede_json("s1", -12.0464, -77.0428, 50.0)).unwrap();
    lima.nombre = "Oficina Central".into();
    let mut cusco = lima.clone();
    cusco.id = "s2".into();
    cusco.nombre = "Almacén Sur".into();
    cusco.direccion = "Av. El Sol 400, Cusco".into();
    let sedes = vec![lima, cusco];

    let f = SedeFilter {
        search: "cusco".into(),
    };
    let ids: Vec<&str> = f.apply(&sedes).iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["s2"]);

    let f = SedeFilter {
        search: "central".into(),
    };
    assert_eq!(f.apply(&sedes).len(), 1);
    assert_eq!(SedeFilter::default().apply(&sedes).len(), 2);
}
