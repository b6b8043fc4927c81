use celestial_healpix::{DiscCenter, HealPix};

fn main() -> anyhow::Result<()> {
    let nside = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 256,
    };

    let hp = HealPix::ring(nside)?;
    println!("{hp}");

    let (ra_deg, dec_deg, radius_deg) = (83.633, -5.375, 0.5);
    let center = DiscCenter::Equatorial {
        ra: ra_deg,
        dec: dec_deg,
    };

    let exact = hp.query_disc(center, radius_deg, false)?;
    let covering = hp.query_disc(center, radius_deg, true)?;
    println!(
        "\n{} pixel centers within {:.1}° of ({:.3}, {:.3}), {} pixels touching:\n",
        exact.len(),
        radius_deg,
        ra_deg,
        dec_deg,
        covering.len(),
    );

    for &pixel in &exact {
        let (ra, dec) = hp.pix2eq(pixel)?;
        println!("  {:>10}  RA {:.6}°  Dec {:+.6}°", pixel, ra, dec);
    }

    Ok(())
}
