use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rgiras
/// Administration client for trips, expenses, attendance and incidents
#[derive(Parser)]
#[command(
    name = "rgiras",
    version = env!("CARGO_PKG_VERSION"),
    about = "Admin CLI for business trips, expenses, sites, attendance and incident reports",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration directory (useful for tests or multiple accounts)
    #[arg(global = true, long = "home", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Override the backend base URL from the configuration file
    #[arg(global = true, long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Also write diagnostic logs to stderr
    #[arg(global = true, short = 'v', long = "verbose")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration directory and a default configuration file
    Init {
        #[arg(long, help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Sign in and store the session token
    Login {
        #[arg(long, short = 'e', default_value = "")]
        email: String,

        /// Read from stdin when omitted
        #[arg(long, short = 'p')]
        password: Option<String>,
    },

    /// Remove the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Summary cards, expense breakdown and monthly trend
    Dashboard {
        #[arg(long, help = "Only trips of this user id")]
        usuario: Option<String>,

        #[arg(long, help = "Only this trip id")]
        gira: Option<String>,

        #[arg(long = "from", value_name = "YYYY-MM-DD")]
        from: Option<String>,

        #[arg(long = "to", value_name = "YYYY-MM-DD")]
        to: Option<String>,

        #[arg(long, help = "Expense type: viatico or compra")]
        tipo: Option<String>,

        #[arg(long, help = "Print the summary as JSON")]
        json: bool,
    },

    /// Business trips
    Giras {
        #[command(subcommand)]
        action: GiraAction,
    },

    /// Expenses of a trip
    Gastos {
        #[command(subcommand)]
        action: GastoAction,
    },

    /// User accounts
    Usuarios {
        #[command(subcommand)]
        action: UsuarioAction,
    },

    /// Work sites and their geofence
    Sedes {
        #[command(subcommand)]
        action: SedeAction,
    },

    /// Daily attendance with geofence validity
    Asistencia {
        #[command(subcommand)]
        action: AsistenciaAction,
    },

    /// Incident reports
    Incidencias {
        #[command(subcommand)]
        action: IncidenciaAction,
    },

    /// Export a dataset to csv, json, xlsx or pdf
    Export {
        #[command(subcommand)]
        dataset: ExportDataset,

        #[command(flatten)]
        out: ExportArgs,
    },

    /// Distance in meters between two points, optionally checked against a radius
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,

        #[arg(long, help = "Geofence radius in meters")]
        radius: Option<f64>,
    },
}

/// Paging shared by the list commands.
#[derive(Args, Debug, Clone)]
pub struct PageArgs {
    #[arg(long, default_value_t = 1)]
    pub page: usize,

    /// Defaults to `page_size` from the configuration
    #[arg(long = "per-page")]
    pub per_page: Option<usize>,

    #[arg(long, help = "Print every matching row")]
    pub all: bool,
}

// ---------------------------
// Giras
// ---------------------------

#[derive(Subcommand)]
pub enum GiraAction {
    /// List trips
    List {
        #[arg(long, short = 's', default_value = "")]
        search: String,

        #[arg(long, help = "Pendiente, En Proceso, Completada or Cancelada")]
        estado: Option<String>,

        #[arg(long = "unidad")]
        unidad_negocio: Option<String>,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Show one trip
    Show { id: String },

    /// Create a trip
    Add {
        #[command(flatten)]
        fields: GiraFields,
    },

    /// Update a trip; omitted fields keep their value
    Edit {
        id: String,

        #[command(flatten)]
        fields: GiraFields,
    },

    /// Delete a trip
    Delete {
        id: String,

        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct GiraFields {
    #[arg(long)]
    pub task: Option<String>,

    /// User id
    #[arg(long)]
    pub usuario: Option<String>,

    #[arg(long)]
    pub motivo: Option<String>,

    #[arg(long)]
    pub comentario: Option<String>,

    #[arg(long)]
    pub semana: Option<String>,

    #[arg(long = "unidad")]
    pub unidad_negocio: Option<String>,

    #[arg(long = "task-gira")]
    pub task_gira: Option<String>,

    #[arg(long)]
    pub estado: Option<String>,

    #[arg(long)]
    pub lugar: Option<String>,

    #[arg(long = "inicio", value_name = "YYYY-MM-DD")]
    pub fecha_inicio: Option<String>,

    #[arg(long = "fin", value_name = "YYYY-MM-DD")]
    pub fecha_fin: Option<String>,

    #[arg(long = "soles")]
    pub monto_soles: Option<f64>,

    #[arg(long = "dolares")]
    pub monto_dolares: Option<f64>,

    #[arg(long)]
    pub active: Option<bool>,
}

// ---------------------------
// Gastos
// ---------------------------

#[derive(Subcommand)]
pub enum GastoAction {
    /// List the expenses of a trip
    List {
        #[arg(long)]
        gira: String,

        #[arg(long, short = 's', default_value = "")]
        search: String,

        #[arg(long, help = "viatico or compra")]
        tipo: Option<String>,

        #[arg(long)]
        categoria: Option<String>,

        #[arg(long, help = "PEN or USD")]
        moneda: Option<String>,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Show one expense with its items
    Show {
        id: String,

        #[arg(long)]
        gira: String,
    },
}

// ---------------------------
// Usuarios
// ---------------------------

#[derive(Subcommand)]
pub enum UsuarioAction {
    /// List users
    List {
        #[arg(long, short = 's', default_value = "")]
        search: String,

        #[arg(long)]
        active: Option<bool>,

        #[arg(long)]
        area: Option<String>,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// Show one user
    Show { id: String },

    /// Create a user
    Add {
        #[command(flatten)]
        fields: UsuarioFields,
    },

    /// Update a user; omitted fields keep their value
    Edit {
        id: String,

        #[command(flatten)]
        fields: UsuarioFields,
    },

    /// Delete a user
    Delete {
        id: String,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Print the areas accepted by --area
    Areas,
}

#[derive(Args, Debug, Clone, Default)]
pub struct UsuarioFields {
    #[arg(long)]
    pub nombre: Option<String>,

    #[arg(long)]
    pub apellido: Option<String>,

    #[arg(long)]
    pub dni: Option<String>,

    #[arg(long)]
    pub cargo: Option<String>,

    /// Repeat or separate with commas
    #[arg(long = "area", value_delimiter = ',')]
    pub area: Vec<String>,

    #[arg(long)]
    pub celular: Option<String>,

    #[arg(long)]
    pub correo: Option<String>,

    #[arg(long)]
    pub password: Option<String>,

    #[arg(long)]
    pub photo: Option<String>,

    /// Site id
    #[arg(long)]
    pub sede: Option<String>,

    #[arg(long)]
    pub active: Option<bool>,
}

// ---------------------------
// Sedes
// ---------------------------

#[derive(Subcommand)]
pub enum SedeAction {
    /// List sites
    List {
        #[arg(long, short = 's', default_value = "")]
        search: String,
    },

    /// Show one site
    Show { id: String },

    /// Create a site
    Add {
        #[command(flatten)]
        fields: SedeFields,
    },

    /// Update a site; omitted fields keep their value
    Edit {
        id: String,

        #[command(flatten)]
        fields: SedeFields,
    },

    /// Delete a site
    Delete {
        id: String,

        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Address autocomplete through Google Places
    Search { input: String },

    /// Name, address and coordinates of a place id
    Place { place_id: String },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SedeFields {
    #[arg(long)]
    pub nombre: Option<String>,

    #[arg(long)]
    pub direccion: Option<String>,

    #[arg(long = "lat", allow_negative_numbers = true)]
    pub latitude: Option<f64>,

    #[arg(long = "lon", allow_negative_numbers = true)]
    pub longitude: Option<f64>,

    /// Geofence radius in meters
    #[arg(long)]
    pub radio: Option<f64>,

    /// Fill address and coordinates from a Places id
    #[arg(long = "place")]
    pub place_id: Option<String>,

    #[arg(long)]
    pub active: Option<bool>,
}

// ---------------------------
// Asistencia
// ---------------------------

/// Day selection for attendance.
#[derive(Args, Debug, Clone, Default)]
pub struct DayArgs {
    /// Defaults to today
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<String>,

    #[arg(long, conflicts_with = "next", help = "The day before --date")]
    pub prev: bool,

    #[arg(long, help = "The day after --date (never past today)")]
    pub next: bool,
}

#[derive(Subcommand)]
pub enum AsistenciaAction {
    /// Attendance of one day
    List {
        #[command(flatten)]
        day: DayArgs,

        #[arg(long, short = 's', default_value = "")]
        search: String,

        #[arg(long, help = "todos, validas or invalidas", default_value = "todos")]
        estado: String,

        /// Site id
        #[arg(long)]
        sede: Option<String>,

        #[arg(long, help = "Recompute distances against each site")]
        check: bool,

        #[command(flatten)]
        paging: PageArgs,
    },

    /// One attendance record with recomputed distances
    Show {
        id: String,

        #[command(flatten)]
        day: DayArgs,
    },
}

// ---------------------------
// Incidencias
// ---------------------------

#[derive(Subcommand)]
pub enum IncidenciaAction {
    /// List incidents
    List {
        #[arg(long, short = 's', default_value = "")]
        search: String,

        #[arg(long)]
        area: Option<String>,

        #[arg(long, help = "Pendiente, En Revisión, Resuelto or Cerrado")]
        estado: Option<String>,

        #[arg(long, help = "Bajo, Medio, Alto or Crítico")]
        severidad: Option<String>,

        #[arg(long, help = "todas, hoy, semana, mes or rango")]
        fecha: Option<String>,

        #[arg(long = "from", value_name = "YYYY-MM-DD")]
        from: Option<String>,

        #[arg(long = "to", value_name = "YYYY-MM-DD")]
        to: Option<String>,

        #[arg(long, default_value_t = 1)]
        page: usize,

        #[arg(long)]
        limit: Option<usize>,
    },

    /// Show one incident with its state history
    Show { id: String },

    /// Change state, deadline or assignee
    Update {
        id: String,

        #[arg(long)]
        estado: String,

        #[arg(long, value_name = "YYYY-MM-DD")]
        deadline: Option<String>,

        /// User id
        #[arg(long = "asignar")]
        asigned: Option<String>,

        #[arg(long, default_value = "")]
        notas: String,
    },
}

// ---------------------------
// Export
// ---------------------------

#[derive(Args, Debug, Clone)]
pub struct ExportArgs {
    #[arg(long, value_enum, default_value = "csv", global = true)]
    pub format: ExportFormat,

    /// Absolute output path
    #[arg(long, value_name = "FILE", global = true)]
    pub file: Option<String>,

    #[arg(long, short = 'f', global = true)]
    pub force: bool,
}

#[derive(Subcommand)]
pub enum ExportDataset {
    /// Attendance of one day
    Asistencias {
        #[command(flatten)]
        day: DayArgs,
    },

    /// Expenses of a trip
    Gastos {
        #[arg(long)]
        gira: String,

        #[arg(long, value_name = "RANGE", help = "Filter by issue date")]
        range: Option<String>,
    },

    /// All trips
    Giras {
        #[arg(long, value_name = "RANGE", help = "Filter by start date")]
        range: Option<String>,
    },

    /// All incidents
    Incidencias {
        #[arg(long, value_name = "RANGE", help = "Filter by report date")]
        range: Option<String>,
    },
}
