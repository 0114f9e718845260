fn main() {
    println!("cargo:rerun-if-env-changed=HEATMON_SENSOR_NAME");
    println!("cargo:rerun-if-env-changed=HEATMON_API_ENDPOINT");
    println!("cargo:rerun-if-env-changed=HEATMON_T_OFFSET");
    println!("cargo:rerun-if-env-changed=HEATMON_H_OFFSET");
    println!("cargo:rerun-if-env-changed=HEATMON_ADJUST");
    println!("cargo:rerun-if-env-changed=HEATMON_REPORT");
    println!("cargo:rerun-if-env-changed=WIFI_SSID");
    println!("cargo:rerun-if-env-changed=WIFI_PASS");

    #[cfg(feature = "espidf")]
    embuild::espidf::sysenv::output();
}
