use celestial_healpix::constants::{RAD_TO_DEG, SQ_DEG_PER_SR};
use celestial_healpix::{DiscCenter, HealPix, Scheme};
use clap::{Parser, Subcommand, ValueEnum};
use flexi_logger::Logger;
use std::time::Instant;

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser)]
#[command(name = "query-healpix")]
#[command(about = "Map sky positions to HEALPix pixels and query discs")]
struct Cli {
    /// Resolution parameter, a power of two up to 2^29
    #[arg(long, default_value_t = 64)]
    nside: u64,

    /// Pixel ordering scheme (ring, RING, nest, nested, NEST, NESTED)
    #[arg(long, default_value = "ring")]
    scheme: Scheme,

    /// Output format
    #[arg(long, value_enum, default_value = "table", global = true)]
    format: OutputFormat,

    /// Log level written to stderr (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print resolution information
    Info,
    /// Pixels containing equatorial positions (degrees)
    Eq2pix {
        /// Right ascensions, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        ra: Vec<f64>,
        /// Declinations, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        dec: Vec<f64>,
    },
    /// Pixels containing spherical positions (radians)
    Ang2pix {
        /// Colatitudes, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        theta: Vec<f64>,
        /// Azimuths, comma separated
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        phi: Vec<f64>,
    },
    /// Pixel centers as equatorial positions (degrees)
    Pix2eq {
        #[arg(required = true)]
        pixels: Vec<u64>,
    },
    /// Pixel centers as spherical positions (radians)
    Pix2ang {
        #[arg(required = true)]
        pixels: Vec<u64>,
    },
    /// Pixels covered by a disc
    Disc {
        /// Right ascension in degrees, or colatitude in radians with --angular
        #[arg(allow_negative_numbers = true)]
        lon: f64,
        /// Declination in degrees, or azimuth in radians with --angular
        #[arg(allow_negative_numbers = true)]
        lat: f64,
        /// Disc radius, degrees (radians with --angular)
        #[arg(long, default_value = "1.0")]
        radius: f64,
        /// Include every pixel touching the disc, not only those with centers inside
        #[arg(long)]
        inclusive: bool,
        /// Read the center as (theta, phi) and the radius in radians
        #[arg(long)]
        angular: bool,
        /// Print query timing
        #[arg(long)]
        timing: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::try_with_str(&cli.log_level)?
        .log_to_stderr()
        .start()?;

    let hp = HealPix::new(cli.scheme, cli.nside)?;

    match cli.command {
        Commands::Info => print_info(&hp, &cli.format)?,
        Commands::Eq2pix { ra, dec } => {
            let pixels = hp.eq2pix_batch(&ra, &dec)?;
            let rows = pixels
                .into_iter()
                .zip(ra.into_iter().zip(dec))
                .map(|(pixel, (ra_deg, dec_deg))| EqRow {
                    pixel,
                    ra_deg,
                    dec_deg,
                })
                .collect::<Vec<_>>();
            print_rows(&rows, &cli.format)?;
        }
        Commands::Ang2pix { theta, phi } => {
            let pixels = hp.ang2pix_batch(&theta, &phi)?;
            let rows = pixels
                .into_iter()
                .zip(theta.into_iter().zip(phi))
                .map(|(pixel, (theta, phi))| AngRow { pixel, theta, phi })
                .collect::<Vec<_>>();
            print_rows(&rows, &cli.format)?;
        }
        Commands::Pix2eq { pixels } => {
            let (ra, dec) = hp.pix2eq_batch(&pixels)?;
            let rows = pixels
                .into_iter()
                .zip(ra.into_iter().zip(dec))
                .map(|(pixel, (ra_deg, dec_deg))| EqRow {
                    pixel,
                    ra_deg,
                    dec_deg,
                })
                .collect::<Vec<_>>();
            print_rows(&rows, &cli.format)?;
        }
        Commands::Pix2ang { pixels } => {
            let (theta, phi) = hp.pix2ang_batch(&pixels)?;
            let rows = pixels
                .into_iter()
                .zip(theta.into_iter().zip(phi))
                .map(|(pixel, (theta, phi))| AngRow { pixel, theta, phi })
                .collect::<Vec<_>>();
            print_rows(&rows, &cli.format)?;
        }
        Commands::Disc {
            lon,
            lat,
            radius,
            inclusive,
            angular,
            timing,
        } => {
            let center = if angular {
                DiscCenter::Angular {
                    theta: lon,
                    phi: lat,
                }
            } else {
                DiscCenter::Equatorial { ra: lon, dec: lat }
            };

            let start = if timing { Some(Instant::now()) } else { None };

            let pixels = hp.query_disc(center, radius, inclusive)?;

            if let Some(start_time) = start {
                let elapsed = start_time.elapsed();
                eprintln!(
                    "Query completed in {:.2} ms",
                    elapsed.as_secs_f64() * 1000.0
                );
            }

            let rows = pixels
                .into_iter()
                .map(|pixel| DiscRow { pixel })
                .collect::<Vec<_>>();
            print_rows(&rows, &cli.format)?;
        }
    }

    Ok(())
}

/// One output line of a pixel listing.
trait Row: serde::Serialize {
    const HEADER: &'static str;

    fn csv(&self) -> String;

    fn table(&self) -> String;
}

#[derive(serde::Serialize)]
struct EqRow {
    pixel: u64,
    ra_deg: f64,
    dec_deg: f64,
}

impl Row for EqRow {
    const HEADER: &'static str = "pixel,ra_deg,dec_deg";

    fn csv(&self) -> String {
        format!("{},{},{}", self.pixel, self.ra_deg, self.dec_deg)
    }

    fn table(&self) -> String {
        format!(
            "{:>12} RA={:.6}° Dec={:+.6}°",
            self.pixel, self.ra_deg, self.dec_deg
        )
    }
}

#[derive(serde::Serialize)]
struct AngRow {
    pixel: u64,
    theta: f64,
    phi: f64,
}

impl Row for AngRow {
    const HEADER: &'static str = "pixel,theta,phi";

    fn csv(&self) -> String {
        format!("{},{},{}", self.pixel, self.theta, self.phi)
    }

    fn table(&self) -> String {
        format!(
            "{:>12} theta={:.9} phi={:.9}",
            self.pixel, self.theta, self.phi
        )
    }
}

#[derive(serde::Serialize)]
struct DiscRow {
    pixel: u64,
}

impl Row for DiscRow {
    const HEADER: &'static str = "pixel";

    fn csv(&self) -> String {
        self.pixel.to_string()
    }

    fn table(&self) -> String {
        format!("{:>12}", self.pixel)
    }
}

fn print_rows<R: Row>(rows: &[R], format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            for (i, row) in rows.iter().enumerate() {
                println!("{:6}: {}", i + 1, row.table());
            }
            if rows.is_empty() {
                println!("No pixels.");
            } else {
                println!("\nTotal results: {}", rows.len());
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(rows)?),
        OutputFormat::Csv => {
            println!("{}", R::HEADER);
            for row in rows {
                println!("{}", row.csv());
            }
        }
    }
    Ok(())
}

#[derive(serde::Serialize)]
struct Info {
    scheme: i64,
    scheme_name: &'static str,
    nside: u64,
    order: u32,
    npix: u64,
    ncap: u64,
    area_sr: f64,
    area_sq_deg: f64,
    max_pixrad_deg: f64,
}

fn print_info(hp: &HealPix, format: &OutputFormat) -> anyhow::Result<()> {
    let info = Info {
        scheme: hp.scheme().id(),
        scheme_name: hp.scheme_name(),
        nside: hp.nside(),
        order: hp.resolution().order(),
        npix: hp.npix(),
        ncap: hp.ncap(),
        area_sr: hp.area(),
        area_sq_deg: hp.area() * SQ_DEG_PER_SR,
        max_pixrad_deg: hp.max_pixrad() * RAD_TO_DEG,
    };

    match format {
        OutputFormat::Table => {
            println!("{hp}");
            println!("order:       {}", info.order);
            println!("max_pixrad:  {:.6}°", info.max_pixrad_deg);
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&info)?),
        OutputFormat::Csv => {
            println!("scheme,scheme_name,nside,order,npix,ncap,area_sr,area_sq_deg,max_pixrad_deg");
            println!(
                "{},{},{},{},{},{},{},{},{}",
                info.scheme,
                info.scheme_name,
                info.nside,
                info.order,
                info.npix,
                info.ncap,
                info.area_sr,
                info.area_sq_deg,
                info.max_pixrad_deg
            );
        }
    }
    Ok(())
}
