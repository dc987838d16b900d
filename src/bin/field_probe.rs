//! Field probe - smoke test for the potential field engine
//!
//! Registers two sample obstacles and prints the five evaluation
//! outputs at a fixed query point and direction. Not a product interface;
//! useful to eyeball the field after changing the cost model or its
//! configuration.
//!
//! Usage: `field_probe [config.toml]`

use kavach_field::{FieldConfig, PotentialField, Result, Vec3};
use std::path::Path;
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("kavach_field=info".parse().unwrap())
                .add_directive("field_probe=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let config = if args.len() > 1 {
        let config_path = Path::new(&args[1]);
        info!("Loading configuration from {:?}", config_path);
        FieldConfig::load(config_path)?
    } else {
        info!("Using default configuration");
        FieldConfig::default()
    };

    let mut field = PotentialField::from_config(&config);
    field.add_obstacle(1.0, 2.0, 3.0, 0.0, 0.0)?;
    field.add_obstacle(0.0, 0.0, 0.0, 1.0, 1.0)?;
    info!("Registered {} obstacles", field.registry().len());

    let x = Vec3::new(1.0, 2.0, 1.0);
    let s = Vec3::new(1.0, 1.0, 0.0);
    info!(
        "Query point ({:.1}, {:.1}, {:.1}), direction ({:.1}, {:.1}, {:.1})",
        x.x, x.y, x.z, s.x, s.y, s.z
    );

    let sample = field.sample(&x)?;
    info!("Potential: {:.6}", sample.potential);
    info!(
        "Gradient:  [{:.6}, {:.6}, {:.6}]",
        sample.gradient.x, sample.gradient.y, sample.gradient.z
    );
    for row in &sample.hessian.rows {
        info!("Hessian:   [{:.6}, {:.6}, {:.6}]", row[0], row[1], row[2]);
    }
    info!(
        "Directional derivative:        {:.6}",
        field.directional_derivative(&x, &s)?
    );
    info!(
        "Second directional derivative: {:.6}",
        field.second_directional_derivative(&x, &s)?
    );

    Ok(())
}
