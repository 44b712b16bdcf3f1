//! Read a snapshot of batteries and report what could be read

use powerstat::{Battery, Error, Field, FixedSource, Manager, PartialError, SourceError, State};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let source = FixedSource::new("snapshot")
        .with_battery(Battery {
            state: State::Discharging,
            current: 31_200.0,
            full: 48_000.0,
            design: 57_000.0,
            charge_rate: 9_500.0,
            voltage: 11.9,
            design_voltage: 11.4,
        })
        .with_partial(
            Battery {
                state: State::Charging,
                current: 12_000.0,
                full: 24_000.0,
                ..Default::default()
            },
            PartialError::new()
                .with(Field::Voltage, SourceError::msg("voltage_now missing"))
                .with(Field::DesignVoltage, SourceError::msg("voltage_min_design missing")),
        )
        .with_failure(SourceError::msg("device disappeared"));

    let manager = Manager::new(source);
    let reading = manager.get_all();

    if let Some(Error::Fatal(err)) = reading.error() {
        eprintln!("{}", err);
        std::process::exit(1);
    }

    for (i, battery, err) in reading.rows() {
        match err {
            Some(err) if err.is_fatal() => {
                eprintln!("Error getting info for BAT{}: {}", i, err);
            }
            Some(err) => {
                println!("BAT{}: {} (incomplete: {})", i, battery, err);
            }
            None => println!("BAT{}: {}", i, battery),
        }
    }
}
