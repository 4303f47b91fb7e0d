use super::gira::GiraRef;
use super::{Validate, require_id, require_non_negative};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TipoGasto {
    Viatico,
    Compra,
}

impl TipoGasto {
    pub fn as_str(&self) -> &'static str {
        match self {
            TipoGasto::Viatico => "viatico",
            TipoGasto::Compra => "compra",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "viatico" | "viático" | "viaticos" | "viáticos" => Some(TipoGasto::Viatico),
            "compra" | "compras" => Some(TipoGasto::Compra),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Moneda {
    #[serde(rename = "PEN")]
    Pen,
    #[serde(rename = "USD")]
    Usd,
}

impl Moneda {
    pub fn as_str(&self) -> &'static str {
        match self {
            Moneda::Pen => "PEN",
            Moneda::Usd => "USD",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Moneda::Pen => "S/",
            Moneda::Usd => "$",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "PEN" | "S/" | "SOLES" => Some(Moneda::Pen),
            "USD" | "$" | "DOLARES" | "DÓLARES" => Some(Moneda::Usd),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemGasto {
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub unidad_medida: String,
    #[serde(default)]
    pub precio_unitario: f64,
    #[serde(default)]
    pub cantidad: f64,
    #[serde(default)]
    pub subtotal: f64,
}

/// An expense receipt attached to a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gasto {
    #[serde(rename = "_id")]
    pub id: String,
    pub tipo: TipoGasto,
    #[serde(default)]
    pub categoria: String,
    #[serde(default)]
    pub ruc: String,
    #[serde(default)]
    pub razon_social: String,
    pub fecha_emision: DateTime<Utc>,
    pub total: f64,
    pub moneda: Moneda,
    #[serde(default)]
    pub igv: f64,
    #[serde(default)]
    pub descuento: f64,
    #[serde(default)]
    pub detraccion: f64,
    #[serde(default)]
    pub modificado: bool,
    #[serde(default)]
    pub img_url: String,
    #[serde(default)]
    pub con_sustento: bool,
    #[serde(default)]
    pub detalle_sustento: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub direccion: String,
    #[serde(default)]
    pub items: Vec<ItemGasto>,
    pub gira: GiraRef,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Gasto {
    /// Amount before IGV.
    pub fn subtotal(&self) -> f64 {
        self.total - self.igv
    }
}

impl Validate for Gasto {
    const WHAT: &'static str = "expense";

    fn validate(&self) -> Result<(), String> {
        require_id(&self.id)?;
        require_id(&self.gira.id).map_err(|_| format!("expense {}: missing trip", self.id))?;
        require_non_negative("total", self.total)?;
        require_non_negative("igv", self.igv)?;
        Ok(())
    }
}

/// Expense categories used by the dashboard filters.
pub const CATEGORIAS: &[&str] = &["Alimentación", "Transporte", "Hospedaje", "Otros"];
