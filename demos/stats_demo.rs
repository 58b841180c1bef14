use clap::Parser;
use long_map::LongMap;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'n', long = "entries", default_value_t = 1000)]
    entries: usize,

    /// Distance between consecutive keys. Powers of two pile keys into few
    /// buckets until the table grows past them.
    #[arg(short = 's', long = "stride", default_value_t = 1)]
    stride: i64,

    #[arg(short = 'l', long = "load-factor", default_value_t = long_map::DEFAULT_LOAD_FACTOR)]
    load_factor: f64,
}

fn main() {
    let args = Args::parse();

    println!(
        "Creating LongMap with {} buckets and load factor {}",
        long_map::DEFAULT_CAPACITY,
        args.load_factor
    );

    let mut map: LongMap<u64> =
        LongMap::with_capacity_and_load_factor(long_map::DEFAULT_CAPACITY, args.load_factor);

    println!(
        "Filling map with {} keys spaced {} apart...",
        args.entries, args.stride
    );

    let mut growths = 0;
    let mut capacity = map.capacity();
    for i in 0..args.entries {
        let key = (i as i64).wrapping_mul(args.stride);
        map.insert(key, i as u64);

        if map.capacity() != capacity {
            growths += 1;
            capacity = map.capacity();
        }
    }

    println!(
        "Inserted {} keys, final capacity {} after {} growths",
        map.len(),
        map.capacity(),
        growths
    );

    map.chain_histogram().print();
    map.debug_stats().print();
}
