use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::geofence::{GeoPoint, Geofence};
use crate::errors::AppResult;
use crate::utils::colors::yes_no;
use crate::utils::formatting::meters;

/// Handle `distance`: haversine meters between two points, and the
/// geofence verdict when a radius is given.
pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Distance {
        lat1,
        lon1,
        lat2,
        lon2,
        radius,
    } = cmd
    {
        let a = GeoPoint::new(*lat1, *lon1)?;
        let b = GeoPoint::new(*lat2, *lon2)?;

        match radius {
            None => println!("{} m", a.distance_to(&b)),
            Some(r) => {
                let check = Geofence::new(a, *r)?.check(&b);
                println!(
                    "{} m ({}) · radius {r} m · {}",
                    check.distance_m,
                    meters(check.distance_m),
                    yes_no(check.inside, "inside", "outside")
                );
            }
        }
    }
    Ok(())
}
