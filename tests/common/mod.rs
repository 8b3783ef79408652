use std::path::Path;

use cabling_census::config::CountConfig;
use rust_xlsxwriter::Workbook;

pub const HEADER: &str = "site,file,router,floorSw,poeSw,ap,lan,mc,floor";

/// Cable ID cell contents.
pub enum Id<'a> {
    Number(f64),
    Text(&'a str),
}

/// One spreadsheet row in the column layout of [`settings`].
pub struct Row<'a> {
    pub connect: &'a str,
    pub id: Id<'a>,
    pub from: (&'a str, &'a str, &'a str),
    pub to: (&'a str, &'a str, &'a str),
}

/// Shorthand for a row: `(floor, device, host)` per side.
pub fn row<'a>(
    connect: &'a str,
    id: Id<'a>,
    from: (&'a str, &'a str, &'a str),
    to: (&'a str, &'a str, &'a str),
) -> Row<'a> {
    Row {
        connect,
        id,
        from,
        to,
    }
}

pub fn settings() -> CountConfig {
    let json = serde_json::json!({
        "DeviceFromConnectColumn": 1,
        "DeviceFromCableIdColumn": 2,
        "DeviceFromKeyPortNameColumn": 3,
        "DeviceFromFloorNameColumn": 4,
        "DeviceFromDeviceNameColumn": 5,
        "DeviceFromDeviceNumberColumn": 6,
        "DeviceFromHostNameColumn": 7,
        "DeviceFromModelNameColumn": 8,
        "DeviceFromPortNameColumn": 9,
        "DeviceFromConnectorNameColumn": 10,
        "DeviceToFloorNameColumn": 11,
        "DeviceToDeviceNameColumn": 12,
        "DeviceToDeviceNumberColumn": 13,
        "DeviceToHostNameColumn": 14,
        "DeviceToModelNameColumn": 15,
        "DeviceToPortNameColumn": 16,
        "WordConnect": "connected",
        "WordDisconnect": "disconnected",
        "DeviceNameHeader": HEADER,
        "DeviceNameToRouter": "RT",
        "DeviceNameToFloorSw": "FSW",
        "DeviceNameToPoeSw": "PSW,FSW",
        "DeviceNameToAp": "AP",
        "DeviceNameToRosette": "LAN",
        "DeviceNameToMc": "MC",
        "FileNamePrefix": "Cabling_",
        "FileNameWord": "_"
    });
    CountConfig::from_json(&json.to_string()).expect("settings parsed")
}

/// Writes a workbook with a header row followed by `rows` on each sheet.
pub fn write_workbook(path: &Path, sheets: &[(&str, Vec<Row<'_>>)]) {
    let mut workbook = Workbook::new();
    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).expect("sheet named");
        for (col, title) in ["state", "id", "key", "floor", "device", "no", "host"]
            .iter()
            .enumerate()
        {
            sheet.write_string(0, col as u16, *title).expect("header cell");
        }

        for (index, row) in rows.iter().enumerate() {
            let r = (index + 1) as u32;
            sheet.write_string(r, 0, row.connect).expect("state cell");
            match row.id {
                Id::Number(value) => sheet.write_number(r, 1, value),
                Id::Text(value) => sheet.write_string(r, 1, value),
            }
            .expect("id cell");
            sheet.write_string(r, 3, row.from.0).expect("from floor");
            sheet.write_string(r, 4, row.from.1).expect("from device");
            sheet.write_string(r, 6, row.from.2).expect("from host");
            sheet.write_string(r, 8, "Gi0/1").expect("from port");
            sheet.write_string(r, 10, row.to.0).expect("to floor");
            sheet.write_string(r, 11, row.to.1).expect("to device");
            sheet.write_string(r, 13, row.to.2).expect("to host");
        }
    }
    workbook.save(path).expect("workbook saved");
}
