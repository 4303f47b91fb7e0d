use super::{authed_client, page_footer, paginate, parse_flag};
use crate::cli::parser::{Commands, GastoAction};
use crate::config::Config;
use crate::core::filters::{Filter, GastoFilter};
use crate::core::stats::GastoStats;
use crate::errors::{AppError, AppResult};
use crate::models::gasto::{Gasto, Moneda, TipoGasto};
use crate::ui::messages::{detail, header, info, paragraph};
use crate::utils::colors::{missing, yes_no};
use crate::utils::date::fmt_date;
use crate::utils::formatting::{amount, dolares, money, or_dash, soles};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Gastos { action } = cmd {
        let client = authed_client(cfg)?;

        match action {
            GastoAction::List {
                gira,
                search,
                tipo,
                categoria,
                moneda,
                paging,
            } => {
                let filter = GastoFilter {
                    search: search.clone(),
                    tipo: parse_flag(tipo.as_deref(), "tipo", "viatico, compra", TipoGasto::parse)?,
                    categoria: categoria.clone(),
                    moneda: parse_flag(moneda.as_deref(), "moneda", "PEN, USD", Moneda::parse)?,
                    gira: None,
                };

                let gastos = client.list_gastos(gira)?;
                let matching = filter.apply(&gastos);
                let stats = GastoStats::compute(matching.iter().copied());
                let page = paginate(matching, paging, cfg);

                header(format!("Gastos de la gira {gira}"));
                if page.is_empty() {
                    info("No expenses match the current filters.");
                } else {
                    let mut t = Table::new(vec![
                        Column::new("ID"),
                        Column::new("Fecha"),
                        Column::new("Tipo"),
                        Column::new("Categoría").max(14),
                        Column::new("RUC"),
                        Column::new("Razón social").max(26),
                        Column::new("Total").right(),
                        Column::new("Sustento"),
                    ]);
                    for g in &page.items {
                        t.add_row(vec![
                            g.id.clone(),
                            fmt_date(&g.fecha_emision),
                            g.tipo.as_str().to_string(),
                            or_dash(&g.categoria),
                            if g.ruc.is_empty() { missing() } else { g.ruc.clone() },
                            or_dash(&g.razon_social),
                            money(g.total, g.moneda),
                            yes_no(g.con_sustento, "sí", "no"),
                        ]);
                    }
                    print!("{}", t.render());
                    page_footer(&page);
                }

                println!();
                detail("Gastos", stats.total);
                detail("Viáticos / compras", format!("{} / {}", stats.viaticos, stats.compras));
                detail("Total", format!("{} · {}", soles(stats.total_pen), dolares(stats.total_usd)));
                detail("Sin sustento", stats.sin_sustento);
                detail("Modificados", stats.modificados);
            }

            GastoAction::Show { id, gira } => {
                let gastos = client.list_gastos(gira)?;
                let gasto = gastos
                    .iter()
                    .find(|g| g.id == *id)
                    .ok_or_else(|| AppError::NotFound(format!("expense {id}")))?;
                print_gasto(gasto);
            }
        }
    }
    Ok(())
}

fn print_gasto(g: &Gasto) {
    header(format!("Gasto {}", g.id));
    detail("Gira", or_dash(&g.gira.title));
    detail("Tipo", g.tipo.as_str());
    detail("Categoría", or_dash(&g.categoria));
    detail("Fecha de emisión", fmt_date(&g.fecha_emision));
    detail("RUC", or_dash(&g.ruc));
    detail("Razón social", or_dash(&g.razon_social));
    detail("Dirección", or_dash(&g.direccion));
    detail("Subtotal", money(g.subtotal(), g.moneda));
    detail("IGV", money(g.igv, g.moneda));
    if g.descuento > 0.0 {
        detail("Descuento", money(g.descuento, g.moneda));
    }
    if g.detraccion > 0.0 {
        detail("Detracción", money(g.detraccion, g.moneda));
    }
    detail("Total", money(g.total, g.moneda));
    detail("Con sustento", yes_no(g.con_sustento, "sí", "no"));
    detail("Modificado", yes_no(!g.modificado, "no", "sí"));
    if !g.img_url.is_empty() {
        detail("Comprobante", &g.img_url);
    }
    paragraph("Descripción", &g.descripcion);
    if !g.con_sustento {
        paragraph("Detalle del sustento", &g.detalle_sustento);
    }

    if !g.items.is_empty() {
        header("Items");
        let mut t = Table::new(vec![
            Column::new("Descripción").max(36),
            Column::new("Unidad"),
            Column::new("Cantidad").right(),
            Column::new("P. unitario").right(),
            Column::new("Subtotal").right(),
        ]);
        for it in &g.items {
            t.add_row(vec![
                it.descripcion.clone(),
                or_dash(&it.unidad_medida),
                format!("{}", it.cantidad),
                amount(it.precio_unitario),
                amount(it.subtotal),
            ]);
        }
        print!("{}", t.render());
    }
}
