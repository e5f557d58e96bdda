use std::f64::consts::PI;

use anyhow::{Context, Result};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos();
        mean + std_dev * z
    }
}

/// Seasonal phase in [0, 1): 0 at Jan 1, wrapping at year end.
fn year_phase(ts: NaiveDateTime) -> f64 {
    ts.ordinal() as f64 / 366.0
}

/// Hourly PM2.5 with a winter peak, a mild evening rush, and noise.
fn pm25_at(ts: NaiveDateTime, station_offset: f64, rng: &mut SimpleRng) -> f64 {
    let seasonal = 35.0 * (2.0 * PI * year_phase(ts)).cos();
    let diurnal = 12.0 * (2.0 * PI * (ts.hour() as f64 - 19.0) / 24.0).cos();
    (60.0 + station_offset + seasonal + diurnal + rng.gauss(0.0, 18.0)).max(1.0)
}

/// Hourly temperature: summer peak plus noise.
fn temp_at(ts: NaiveDateTime, rng: &mut SimpleRng) -> f64 {
    14.0 - 16.0 * (2.0 * PI * year_phase(ts)).cos() + rng.gauss(0.0, 2.5)
}

fn main() -> Result<()> {
    env_logger::init();
    let mut rng = SimpleRng::new(42);

    let stations: [(&str, f64); 3] = [
        ("Aotizhongxin", 12.0),
        ("Changping", 0.0),
        ("Dingling", -18.0),
    ];
    let wind_dirs = ["N", "NNE", "NE", "E", "SE", "S", "SW", "W", "NW"];

    let start = NaiveDate::from_ymd_opt(2022, 1, 1)
        .context("building start date")?
        .and_time(NaiveTime::MIN);
    let hours = 2 * 365 * 24;

    let output_path = "main_data.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer
        .write_record(["station", "date", "PM2.5", "RAIN", "TEMP", "PRES", "wd"])
        .context("writing header")?;

    let mut rows = 0usize;
    for (station, offset) in stations {
        for h in 0..hours {
            let ts = start + Duration::hours(h);

            // Roughly one cell in a hundred is left blank, as in the
            // real export.
            let pm25 = if rng.next_f64() < 0.01 {
                String::new()
            } else {
                format!("{:.1}", pm25_at(ts, offset, &mut rng))
            };

            let raining = rng.next_f64() < 0.06;
            let rain = if raining {
                format!("{:.1}", 8.0 * rng.next_f64())
            } else {
                "0.0".to_string()
            };

            let temp = format!("{:.1}", temp_at(ts, &mut rng));
            let pres = format!("{:.1}", rng.gauss(1013.0, 6.0));
            let wd = wind_dirs[(rng.next_u64() % wind_dirs.len() as u64) as usize];

            writer
                .write_record([
                    station,
                    &ts.format("%Y-%m-%d %H:%M:%S").to_string(),
                    &pm25,
                    &rain,
                    &temp,
                    &pres,
                    wd,
                ])
                .with_context(|| format!("writing row {rows}"))?;
            rows += 1;
        }
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {rows} hourly observations for {} stations to {output_path}", stations.len());
    Ok(())
}
