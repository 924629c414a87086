use std::io::Write;

use clap::Args;

use rd_core::geo::{km_to_miles, GeoPoint};

use crate::bootstrap::AppRuntime;

#[derive(Debug, Args)]
pub struct NearbyArgs {
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub lng: f64,

    #[arg(long, default_value_t = 10.0)]
    pub radius_km: f64,
}

pub async fn run<W: Write>(
    runtime: &AppRuntime,
    args: NearbyArgs,
    out: &mut W,
) -> anyhow::Result<()> {
    let origin = GeoPoint::new(args.lat, args.lng)?;
    let offices = runtime
        .deps
        .list_nearby_offices()
        .execute(origin, args.radius_km)
        .await?;

    if offices.is_empty() {
        writeln!(out, "no offices within {} km", args.radius_km)?;
        return Ok(());
    }
    for office in &offices {
        writeln!(
            out,
            "{:<40} {:>8.2} km {:>8.2} mi",
            office.source.name,
            office.distance_km,
            km_to_miles(office.distance_km)
        )?;
    }
    Ok(())
}
