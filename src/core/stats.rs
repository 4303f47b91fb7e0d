//! Summary counters shown above each list, and the dashboard roll-up.

use crate::models::asistencia::{Asistencia, AsistenciaEstado};
use crate::models::gasto::{Gasto, Moneda, TipoGasto};
use crate::models::gira::{Gira, GiraEstado};
use crate::models::incidencia::{Incidencia, IncidenciaEstado, Severidad};
use crate::models::usuario::Usuario;
use crate::utils::date::local_day;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GiraStats {
    pub total: usize,
    pub activas: usize,
    pub completadas: usize,
    pub monto_total_soles: f64,
    pub monto_total_dolares: f64,
}

impl GiraStats {
    pub fn compute<'a>(giras: impl IntoIterator<Item = &'a Gira>) -> Self {
        giras.into_iter().fold(Self::default(), |mut s, g| {
            s.total += 1;
            if g.active {
                s.activas += 1;
            }
            if g.estado == GiraEstado::Completada {
                s.completadas += 1;
            }
            s.monto_total_soles += g.monto_soles;
            s.monto_total_dolares += g.monto_dolares;
            s
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GastoStats {
    pub total: usize,
    pub viaticos: usize,
    pub compras: usize,
    pub total_pen: f64,
    pub total_usd: f64,
    pub sin_sustento: usize,
    pub modificados: usize,
    /// Summed totals per category, both currencies mixed as in the dashboard.
    pub por_categoria: BTreeMap<String, f64>,
}

impl GastoStats {
    pub fn compute<'a>(gastos: impl IntoIterator<Item = &'a Gasto>) -> Self {
        gastos.into_iter().fold(Self::default(), |mut s, g| {
            s.total += 1;
            match g.tipo {
                TipoGasto::Viatico => s.viaticos += 1,
                TipoGasto::Compra => s.compras += 1,
            }
            match g.moneda {
                Moneda::Pen => s.total_pen += g.total,
                Moneda::Usd => s.total_usd += g.total,
            }
            if !g.con_sustento {
                s.sin_sustento += 1;
            }
            if g.modificado {
                s.modificados += 1;
            }
            let cat = if g.categoria.trim().is_empty() {
                "Otros".to_string()
            } else {
                g.categoria.clone()
            };
            *s.por_categoria.entry(cat).or_insert(0.0) += g.total;
            s
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UsuarioStats {
    pub total: usize,
    pub activos: usize,
    pub inactivos: usize,
}

impl UsuarioStats {
    pub fn compute<'a>(usuarios: impl IntoIterator<Item = &'a Usuario>) -> Self {
        usuarios.into_iter().fold(Self::default(), |mut s, u| {
            s.total += 1;
            if u.active {
                s.activos += 1;
            } else {
                s.inactivos += 1;
            }
            s
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AsistenciaStats {
    pub total: usize,
    pub validas: usize,
    pub invalidas: usize,
    pub en_curso: usize,
    pub horas_totales: f64,
}

impl AsistenciaStats {
    pub fn compute<'a>(asistencias: impl IntoIterator<Item = &'a Asistencia>) -> Self {
        asistencias.into_iter().fold(Self::default(), |mut s, a| {
            s.total += 1;
            if a.is_valid() {
                s.validas += 1;
            } else {
                s.invalidas += 1;
            }
            if a.estado() == AsistenciaEstado::InProgress {
                s.en_curso += 1;
            }
            s.horas_totales += a.horas_trabajadas.unwrap_or(0.0);
            s
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IncidenciaStats {
    pub total: u64,
    pub pendientes: usize,
    pub en_revision: usize,
    pub resueltos: usize,
    pub criticos: usize,
}

impl IncidenciaStats {
    /// `total` comes from the server envelope; the other counters only see
    /// the loaded page.
    pub fn compute<'a>(total: u64, incidencias: impl IntoIterator<Item = &'a Incidencia>) -> Self {
        incidencias.into_iter().fold(
            Self {
                total,
                ..Self::default()
            },
            |mut s, i| {
                match i.estado {
                    IncidenciaEstado::Pendiente => s.pendientes += 1,
                    IncidenciaEstado::EnRevision => s.en_revision += 1,
                    IncidenciaEstado::Resuelto => s.resueltos += 1,
                    IncidenciaEstado::Cerrado => {}
                }
                if i.grado_severidad == Severidad::Critico {
                    s.criticos += 1;
                }
                s
            },
        )
    }
}

// ---------------------------
// Dashboard
// ---------------------------

#[derive(Debug, Clone, Default)]
pub struct DashboardFilter {
    pub usuario: Option<String>,
    pub gira: Option<String>,
    pub desde: Option<NaiveDate>,
    pub hasta: Option<NaiveDate>,
    pub tipo: Option<TipoGasto>,
}

impl DashboardFilter {
    fn keeps_gira(&self, g: &Gira) -> bool {
        self.usuario.as_ref().is_none_or(|u| *u == g.usuario.id)
            && self.gira.as_ref().is_none_or(|id| *id == g.id)
    }

    fn keeps_gasto(&self, g: &Gasto) -> bool {
        let day = local_day(&g.fecha_emision);
        self.tipo.is_none_or(|t| t == g.tipo)
            && self.desde.is_none_or(|d| day >= d)
            && self.hasta.is_none_or(|d| day <= d)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TipoBreakdown {
    pub tipo: TipoGasto,
    pub cantidad: usize,
    pub porcentaje: f64,
    pub monto: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthTrend {
    /// `YYYY-MM`
    pub mes: String,
    pub viaticos: f64,
    pub compras: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub usuarios_activos: usize,
    pub giras_activas: usize,
    pub gastos_registrados: usize,
    pub monto_total_pen: f64,
    pub monto_total_usd: f64,
    pub gastos_sin_sustento: usize,
    pub por_categoria: BTreeMap<String, f64>,
    pub por_tipo: Vec<TipoBreakdown>,
    pub tendencia: Vec<MonthTrend>,
}

impl DashboardSummary {
    /// Gastos whose trip is excluded by the filter are dropped as well.
    pub fn compute(
        usuarios: &[Usuario],
        giras: &[Gira],
        gastos: &[Gasto],
        filter: &DashboardFilter,
    ) -> Self {
        let giras: Vec<&Gira> = giras.iter().filter(|g| filter.keeps_gira(g)).collect();
        let gastos: Vec<&Gasto> = gastos
            .iter()
            .filter(|g| giras.iter().any(|gi| gi.id == g.gira.id))
            .filter(|g| filter.keeps_gasto(g))
            .collect();

        let usuarios_activos = usuarios
            .iter()
            .filter(|u| u.active)
            .filter(|u| filter.usuario.as_ref().is_none_or(|id| *id == u.id))
            .count();

        let gs = GastoStats::compute(gastos.iter().copied());

        let por_tipo = [TipoGasto::Viatico, TipoGasto::Compra]
            .into_iter()
            .map(|tipo| {
                let of_tipo: Vec<&&Gasto> = gastos.iter().filter(|g| g.tipo == tipo).collect();
                let cantidad = of_tipo.len();
                let porcentaje = if gastos.is_empty() {
                    0.0
                } else {
                    (cantidad as f64 * 1000.0 / gastos.len() as f64).round() / 10.0
                };
                TipoBreakdown {
                    tipo,
                    cantidad,
                    porcentaje,
                    monto: of_tipo.iter().map(|g| g.total).sum(),
                }
            })
            .collect();

        let mut months: BTreeMap<(i32, u32), MonthTrend> = BTreeMap::new();
        for g in &gastos {
            let d = local_day(&g.fecha_emision);
            let entry = months
                .entry((d.year(), d.month()))
                .or_insert_with(|| MonthTrend {
                    mes: format!("{:04}-{:02}", d.year(), d.month()),
                    ..MonthTrend::default()
                });
            match g.tipo {
                TipoGasto::Viatico => entry.viaticos += g.total,
                TipoGasto::Compra => entry.compras += g.total,
            }
        }

        Self {
            usuarios_activos,
            giras_activas: giras.iter().filter(|g| g.active).count(),
            gastos_registrados: gs.total,
            monto_total_pen: gs.total_pen,
            monto_total_usd: gs.total_usd,
            gastos_sin_sustento: gs.sin_sustento,
            por_categoria: gs.por_categoria,
            por_tipo,
            tendencia: months.into_values().collect(),
        }
    }
}
