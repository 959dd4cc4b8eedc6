use bezier_stats::{Sampler, SamplerConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let sampler = Sampler::new(SamplerConfig::default())?;
    log::debug!("running with {:?}", sampler.config());

    for report in sampler.run().iter() {
        println!("{}", report);
    }
    Ok(())
}
