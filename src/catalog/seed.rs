// src/catalog/seed.rs
//
// The builtin gallery content. Order here is the selector order.

use super::record::{FastenerRecord, SpecTable};

fn record(
    id: &str,
    name: &str,
    description: &str,
    applications: Vec<String>,
    materials: Vec<String>,
    specs: &[(&str, &str)],
    script: &str,
) -> FastenerRecord {
    FastenerRecord {
        id: s!(id),
        name: s!(name),
        description: s!(description),
        applications,
        materials,
        specs: specs.iter().copied().collect::<SpecTable>(),
        image: join!("assets/fasteners/", id, ".svg"),
        script: s!(script),
    }
}

pub fn records() -> Vec<FastenerRecord> {
    vec![
        record(
            "hex-bolt",
            "Hex Bolt",
            "A six-sided headed bolt used with a nut or tapped hole. Ideal for machine \
             assemblies, tooling, and structural connections where high clamping force is required.",
            strings!["Heavy equipment", "Machine frames", "Tooling plates"],
            strings!["Alloy steel", "Stainless steel", "Zinc-plated steel"],
            &[
                ("Thread", "Metric coarse M6–M24 or UNC 1/4\"–1\""),
                ("Head", "Hex external drive"),
                ("Standard", "ISO 4014 / ASME B18.2.1"),
                ("Finish", "Plain, zinc, or black oxide"),
            ],
            "python/python_fastener_export.py --fastener hex_bolt --diameter 12 --length 45",
        ),
        record(
            "socket-cap-screw",
            "Socket Head Cap Screw",
            "A cylindrical head fastener with an internal hex drive. Provides high tensile \
             strength and the ability to be installed in tight spaces with an Allen key.",
            strings![
                "Robotics and automation assemblies",
                "Fixtures and modular tooling",
                "Precision mechanical assemblies",
            ],
            strings!["Alloy steel (12.9)", "Stainless steel", "Titanium"],
            &[
                ("Thread", "Metric M3–M20 or UNC #4–3/4\""),
                ("Head", "Cylindrical, internal hex"),
                ("Standard", "ISO 4762 / ASME B18.3"),
                ("Finish", "Plain, black oxide, passivated"),
            ],
            "python/python_fastener_export.py --fastener socket_cap --diameter 8 --length 30",
        ),
        record(
            "hex-nut",
            "Hex Nut",
            "A hexagonal nut that pairs with bolts or threaded rods. Commonly used to clamp \
             assemblies together and often combined with washers to distribute load.",
            strings!["General fabrication", "Structural frames", "Maintenance"],
            strings!["Low-carbon steel", "Stainless steel", "Nylon insert variants"],
            &[
                ("Thread", "Metric M6–M30 or UNC 1/4\"–1-1/4\""),
                ("Height", "0.8× to 1× nominal thread size"),
                ("Standard", "ISO 4032 / ASME B18.2.2"),
                ("Finish", "Plain, zinc, galvanized"),
            ],
            "python/python_fastener_export.py --fastener hex_nut --diameter 16",
        ),
        record(
            "flat-washer",
            "Flat Washer",
            "A thin, flat disk with a central hole placed under bolt or screw heads. \
             Distributes clamping load, prevents surface damage, and covers oversized holes.",
            strings!["Sheet metal work", "Wood assemblies", "Maintenance repair"],
            strings!["Mild steel", "Stainless steel", "Nylon"],
            &[
                ("Standard", "ISO 7089 / ASME B18.21.1"),
                ("Type", "Type A wide pattern"),
                ("Thickness", "1.6 mm – 3.0 mm typical"),
                ("Finish", "Plain, zinc-plated, black oxide"),
            ],
            "python/python_fastener_export.py --fastener flat_washer --diameter 12 --outer 24",
        ),
        record(
            "blind-rivet",
            "Blind Rivet",
            "A permanent mechanical fastener installed from one side. Pulling the mandrel \
             expands the rivet body, clamping sheets or components together.",
            strings!["Sheet metal enclosures", "Aerospace skins", "Appliance fabrication"],
            strings!["Aluminum", "Steel", "Monel"],
            &[
                ("Body", "Open end, dome head"),
                ("GripRange", "1.6 mm – 6.4 mm"),
                ("Standard", "ISO 15979 / IFI 114"),
                ("Tooling", "Compatible with standard blind rivet pullers"),
            ],
            "python/python_fastener_export.py --fastener blind_rivet --diameter 4.8 --grip 6.0",
        ),
    ]
}
