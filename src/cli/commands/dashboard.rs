use super::{authed_client, parse_flag};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::{DashboardFilter, DashboardSummary};
use crate::errors::AppResult;
use crate::models::gasto::{Gasto, TipoGasto};
use crate::ui::messages::{detail, header};
use crate::utils::date::parse_opt_date;
use crate::utils::formatting::{amount, dolares, soles};
use crate::utils::table::{Column, Table};
use tracing::debug;

/// Handle `dashboard`
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard {
        usuario,
        gira,
        from,
        to,
        tipo,
        json,
    } = cmd
    {
        let filter = DashboardFilter {
            usuario: usuario.clone(),
            gira: gira.clone(),
            desde: parse_opt_date(from.as_deref())?,
            hasta: parse_opt_date(to.as_deref())?,
            tipo: parse_flag(tipo.as_deref(), "tipo", "viatico, compra", TipoGasto::parse)?,
        };

        let client = authed_client(cfg)?;
        let usuarios = client.list_usuarios()?;
        let giras = client.list_giras()?;

        // one request per trip; the backend has no "all expenses" route
        let mut gastos: Vec<Gasto> = Vec::new();
        for g in giras.iter().filter(|g| {
            filter.usuario.as_ref().is_none_or(|u| *u == g.usuario.id)
                && filter.gira.as_ref().is_none_or(|id| *id == g.id)
        }) {
            gastos.extend(client.list_gastos(&g.id)?);
        }
        debug!(giras = giras.len(), gastos = gastos.len(), "dashboard data loaded");

        let summary = DashboardSummary::compute(&usuarios, &giras, &gastos, &filter);

        if *json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }

        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(s: &DashboardSummary) {
    header("Dashboard");
    detail("Usuarios activos", s.usuarios_activos);
    detail("Giras activas", s.giras_activas);
    detail("Gastos registrados", s.gastos_registrados);
    detail("Monto total", format!("{} · {}", soles(s.monto_total_pen), dolares(s.monto_total_usd)));
    detail("Sin sustento", s.gastos_sin_sustento);

    header("Gastos por tipo");
    let mut t = Table::new(vec![
        Column::new("Tipo"),
        Column::new("Cantidad").right(),
        Column::new("%").right(),
        Column::new("Monto").right(),
    ]);
    for b in &s.por_tipo {
        t.add_row(vec![
            b.tipo.as_str().to_string(),
            b.cantidad.to_string(),
            format!("{:.1}", b.porcentaje),
            amount(b.monto),
        ]);
    }
    print!("{}", t.render());

    if !s.por_categoria.is_empty() {
        header("Gastos por categoría");
        let mut t = Table::new(vec![Column::new("Categoría"), Column::new("Monto").right()]);
        for (cat, total) in &s.por_categoria {
            t.add_row(vec![cat.clone(), amount(*total)]);
        }
        print!("{}", t.render());
    }

    if !s.tendencia.is_empty() {
        header("Tendencia mensual");
        let mut t = Table::new(vec![
            Column::new("Mes"),
            Column::new("Viáticos").right(),
            Column::new("Compras").right(),
        ]);
        for m in &s.tendencia {
            t.add_row(vec![m.mes.clone(), amount(m.viaticos), amount(m.compras)]);
        }
        print!("{}", t.render());
    }
}
