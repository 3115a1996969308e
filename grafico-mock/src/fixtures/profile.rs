use std::collections::BTreeMap;

pub fn by_symbol(s: &str) -> Option<BTreeMap<String, String>> {
    let (name, sector, industry) = match s {
        "AG" => ("First Majestic Silver Corp.", "Basic Materials", "Silver"),
        "EXK" => ("Endeavour Silver Corp.", "Basic Materials", "Silver"),
        "FNV" => ("Franco-Nevada Corporation", "Basic Materials", "Gold"),
        "MMX" | "HOLED" | "LONG" => ("Generic Corp", "Technology", "Software"),
        _ => return None,
    };
    Some(BTreeMap::from([
        ("name".to_string(), name.to_string()),
        ("sector".to_string(), sector.to_string()),
        ("industry".to_string(), industry.to_string()),
    ]))
}
