use std::env;
use std::process;

use quaternion::config::Config;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        eprintln!(
            "usage: quat <add|sub|mul|div|conj|norm|inv|normalize|rotate|version> \
            [-q w x y z]... [-s scalar] [-axis x y z] [-angle rad | -deg deg] [-point x y z]"
        );
        process::exit(2);
    }

    let result = Config::new(args).and_then(|cfg| cfg.evaluate());
    match result {
        Ok(res) => println!("{res}"),
        Err(err) => {
            log::error!("{err}");
            process::exit(1);
        }
    }
}
