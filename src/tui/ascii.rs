// header logo

pub const AIDVICE_LOGO: &[&str] = &[
    r"       _     _       _          ",
    r"  __ _(_) __| |_   _(_) ___ ___ ",
    r" / _` | |/ _` \ \ / / |/ __/ _ \",
    r"| (_| | | (_| |\ V /| | (_|  __/",
    r" \__,_|_|\__,_| \_/ |_|\___\___|",
];
