mod bindings;
mod components;
mod config;
mod error;
mod model;
mod timer;
mod util;

fn main() {
    bindings::boot();
}
