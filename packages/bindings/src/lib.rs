use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Savings schemes
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_ppf(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::savings::ppf::PpfInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::savings::ppf::calculate_ppf(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_ssy(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::savings::ssy::SsyInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::savings::ssy::calculate_ssy(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_nps(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::savings::nps::NpsInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::savings::nps::calculate_nps(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn calculate_sip(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::savings::sip::SipInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::savings::sip::calculate_sip(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Income tax
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_income_tax(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::income_tax::calculator::IncomeTaxInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::income_tax::calculator::calculate_income_tax(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn hra_exemption(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::income_tax::hra::HraInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincalc_core::income_tax::hra::calculate_hra_exemption(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::loans::emi::EmiInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fincalc_core::loans::emi::calculate_emi(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn car_loan_affordability(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::loans::affordability::CarLoanInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincalc_core::loans::affordability::calculate_car_loan(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// GST
// ---------------------------------------------------------------------------

#[napi]
pub fn gstr3b_late_filing(input_json: String) -> NapiResult<String> {
    let input: fincalc_core::gst::late_filing::Gstr3bInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fincalc_core::gst::late_filing::calculate_gstr3b_delay(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Display formatting
// ---------------------------------------------------------------------------

#[napi]
pub fn format_inr(amount: String) -> NapiResult<String> {
    let amount: rust_decimal::Decimal = amount.parse().map_err(to_napi_error)?;
    Ok(fincalc_core::format::format_inr(amount))
}
