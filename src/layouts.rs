//! Declarative TC 33 record layouts.
//!
//! Columns are 1-based, as printed in the capture file format documentation.
//! Reserved and filler ranges are declared so every layout covers all 168
//! columns.

use crate::field::FieldDescriptor as F;
use crate::field::FieldFormat;
use crate::schema::RecordSchema;

const UN: FieldFormat = FieldFormat::UnpackedNumeric;
const N: FieldFormat = FieldFormat::Numeric;
const AN: FieldFormat = FieldFormat::Alphanumeric;
const ANS: FieldFormat = FieldFormat::AlphanumericSpecial;
const DX: FieldFormat = FieldFormat::DisplayHex;

/// Links every TCR of one transaction. Always columns 21-35 when present.
pub const MESSAGE_IDENTIFIER: &str = "Message Identifier";

/// Read from `CP01_TCR3` to choose the CP01 TCR 9 layout.
pub const SHIP_TO_COUNTRY_CODE: &str = "Ship to Country Code";

/// Card brand code, only carried by `CP01_TCR1`.
pub const CARD_ID: &str = "Card ID";

/// Schemas reachable through the (application group, sequence tag) index.
///
/// The CP01 TCR 9 layouts are absent; they are selected by
/// [`IntraCountryVariant`](crate::registry::IntraCountryVariant).
pub static PRIMARY_SCHEMAS: &[&RecordSchema] = &[
    &TCR_HEADER,
    &TCR_TRAILER,
    &CP01_TCR0,
    &CP01_TCR1,
    &CP01_TCR2,
    &CP01_TCR3,
    &CP01_TCR4,
    &CP01_TCR5,
    &CP01_TCR6,
    &CP01_TCR7,
    &CP01_TCR8,
    &CP01_TCRA,
    &CP01_TCRB,
    &CP02_TCR0,
    &CP02_TCR1,
    &CP03_TCR0,
    &CP03_TCR1,
    &CP03_TCR4,
    &CP04_TCR0,
    &CP04_TCR1,
    &CP05_TCR0,
    &CP06_TCR0,
    &CP06_TCR1,
    &CP07_TCR0,
    &CP07_TCR8,
    &CP08_TCR0,
    &CP09_TCR0,
    &CP09_TCR4,
    &CP10_TCR0,
    &CP12_TCR0,
];

/// File header (`HEDR`). Carries no Message Identifier.
pub static TCR_HEADER: RecordSchema = RecordSchema {
    name: "TCR_HEADER",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '0',
    application_group: "HEDR",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Destination Identifier", 5, 6, UN),
        F::new("Source Identifier", 11, 6, UN),
        F::new("TC 33 Application Code - Header", 17, 4, AN),
        F::new("Capture File Number", 21, 4, UN),
        F::new("Capture Creation Date", 25, 8, UN),
        F::new("Reserved", 33, 136, AN),
    ],
};

/// File trailer (`TRLR`) with the file-wide count and amount hash totals.
pub static TCR_TRAILER: RecordSchema = RecordSchema {
    name: "TCR_TRAILER",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '0',
    application_group: "TRLR",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Destination Identifier", 5, 6, UN),
        F::new("Source Identifier", 11, 6, UN),
        F::new("TC 33 Application Code - Trailer", 17, 4, AN),
        F::new("Capture File Number", 21, 4, UN),
        F::new("Capture Creation Date", 25, 8, UN),
        F::new("Total Transaction Count", 33, 9, UN),
        F::new("Total Transaction Amount", 42, 20, UN),
        F::new("Reserved", 62, 107, AN),
    ],
};

/// CP01 TCR 0: core transaction data. Opens a transaction.
pub static CP01_TCR0: RecordSchema = RecordSchema {
    name: "CP01_TCR0",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '0',
    application_group: "CP01",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Destination Identifier", 5, 6, UN),
        F::new("Source Identifier", 11, 6, UN),
        F::new("TC 33 Application Code", 17, 4, AN),
        F::new("Message Identifier", 21, 15, AN),
        F::new("Transaction Identifier", 36, 15, AN),
        F::new("Retrieval Reference Number", 51, 12, AN),
        F::new("Account Number", 63, 16, AN),
        F::new("Account Number Extension", 79, 3, AN),
        F::new("Expiration Date", 82, 4, AN),
        F::new("Purchase Date", 86, 4, UN),
        F::new("Authorization Date", 90, 4, AN),
        F::new("Decimal Positions Indicator", 94, 2, AN),
        F::new("Authorized Amount", 96, 12, UN),
        F::new("Authorization Currency Code", 108, 3, AN),
        F::new("Total Authorized Amount", 111, 12, UN),
        F::new("Source Amount", 123, 12, UN),
        F::new("Source Currency Code", 135, 3, AN),
        F::new("Tip Amount", 138, 12, UN),
        F::new("Action Code", 150, 2, AN),
        F::new("Service Identifier", 152, 2, AN),
        F::new("Acquiring Identifier", 154, 6, UN),
        F::new("Message Reason Code", 160, 4, AN),
        F::new("Additional Authorization Indicator", 164, 1, N),
        F::new("Domestic Switch ID", 165, 4, AN),
    ],
};

/// CP01 TCR 1: authorization and acceptance data, including the Card ID.
pub static CP01_TCR1: RecordSchema = RecordSchema {
    name: "CP01_TCR1",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '1',
    application_group: "CP01",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Capture Date", 5, 4, UN),
        F::new("Authorization Code", 9, 6, AN),
        F::new("POS Entry Mode", 15, 2, AN),
        F::new("Card Acceptor ID", 17, 15, ANS),
        F::new("Terminal ID", 32, 8, ANS),
        F::new("Mail/Phone/Electronic Commerce and Payment Indicator", 40, 1, AN),
        F::new("Unattended Acceptance Terminal Indicator", 41, 1, AN),
        F::new("AVS Response Code", 42, 1, AN),
        F::new("Authorization Source Code", 43, 1, AN),
        F::new("Purchase Identifier Format", 44, 1, AN),
        F::new("Purchase Identifier", 45, 25, AN),
        F::new("Card ID", 70, 2, AN),
        F::new("Point-of-Service Condition Code", 72, 2, AN),
        F::new("Processing Code", 74, 6, AN),
        F::new("Network ID", 80, 4, AN),
        F::new("Authorization Response Code", 84, 2, AN),
        F::new("Validation Code", 86, 4, AN),
        F::new("Market-Specific Authorization Data Indicator", 90, 1, AN),
        F::new("Product ID", 91, 2, AN),
        F::new("Program ID", 93, 6, AN),
        F::new("CVV2 Result Code", 99, 1, AN),
        F::new("Authorization Characteristics Indicator", 100, 1, AN),
        F::new("POS Terminal Capability", 101, 1, AN),
        F::new("Cardholder ID Method", 102, 1, AN),
        F::new("Request ID", 103, 26, AN),
        F::new("Electronic Commerce Goods Indicator", 129, 2, AN),
        F::new("Fee Program Indicator", 131, 3, AN),
        F::new("Service Development Field", 134, 1, AN),
        F::new("Account Selection", 135, 1, AN),
        F::new("POS Environment", 136, 1, AN),
        F::new("Time of Purchase", 137, 4, UN),
        F::new("Batch Request ID", 141, 26, AN),
        F::new("Spend Qualified Indicator", 167, 1, AN),
        F::new("CAVV Results Code", 168, 1, AN),
    ],
};

/// CP01 TCR 2: billing and shipping names and postal codes.
pub static CP01_TCR2: RecordSchema = RecordSchema {
    name: "CP01_TCR2",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '2',
    application_group: "CP01",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Bill to Last Name", 5, 60, ANS),
        F::new("Bill to First Name", 65, 60, ANS),
        F::new("Bill to Postal Code", 125, 11, ANS),
        F::new("Ship to Postal Code", 136, 20, ANS),
        F::new("Ship to State/Province Code", 156, 3, ANS),
        F::new("Ship from Postal Code", 159, 10, ANS),
    ],
};

/// CP01 TCR 3: billing address and the Ship to Country Code that selects the TCR 9 layout.
pub static CP01_TCR3: RecordSchema = RecordSchema {
    name: "CP01_TCR3",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '3',
    application_group: "CP01",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Ship to Country Code", 5, 3, AN),
        F::new("Address Line 1", 8, 40, ANS),
        F::new("Address Line 2", 48, 40, ANS),
        F::new("City", 88, 50, ANS),
        F::new("State", 138, 20, ANS),
        F::new("Billing Country Code", 158, 3, AN),
        F::new("Reserved", 161, 8, AN),
    ],
};

/// CP01 TCR 4: merchant data.
pub static CP01_TCR4: RecordSchema = RecordSchema {
    name: "CP01_TCR4",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '4',
    application_group: "CP01",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Merchant Name", 5, 25, ANS),
        F::new("Merchant Street Address", 30, 60, ANS),
        F::new("Merchant City", 90, 13, ANS),
        F::new("Merchant State/Province", 103, 3, ANS),
        F::new("Merchant Country", 106, 3, AN),
        F::new("Merchant Postal Code", 109, 9, ANS),
        F::new("Merchant Phone Number", 118, 15, ANS),
        F::new("Merchant URL", 133, 30, ANS),
        F::new("Merchant Category Code", 163, 4, AN),
        F::new("Reserved", 167, 2, AN),
    ],
};

/// CP01 TCR 5: installment payment.
pub static CP01_TCR5: RecordSchema = RecordSchema {
    name: "CP01_TCR5",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '5',
    application_group: "CP01",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Installment Payment Count", 5, 3, UN),
        F::new("Installment Payment Frequency", 8, 1, AN),
        F::new("Installment Payment Amount", 9, 12, UN),
        F::new("Installment First Payment Date", 21, 6, UN),
        F::new("Installment Grace Period Duration", 27, 3, UN),
        F::new("Installment Grace Period Duration Type", 30, 1, AN),
        F::new("Installment Transaction ID", 31, 15, AN),
        F::new("Reserved", 46, 123, AN),
    ],
};

/// CP01 TCR 6: gateway and 3-D Secure data.
pub static CP01_TCR6: RecordSchema = RecordSchema {
    name: "CP01_TCR6",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '6',
    application_group: "CP01",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Cardholder Authentication Verification Value", 5, 20, ANS),
        F::new("Network Transaction Identifier", 25, 15, AN),
        F::new("Message Integrity Check Value", 40, 20, DX),
        F::new("Transaction Security Level", 60, 2, AN),
        F::new("Transaction ID for 3D Secure", 62, 28, ANS),
        F::new("Program Protocol", 90, 2, AN),
        F::new("Directory Server Transaction ID", 92, 28, ANS),
        F::new("Reserved", 120, 49, AN),
    ],
};

/// CP01 TCR 7: processor supplied data.
pub static CP01_TCR7: RecordSchema = RecordSchema {
    name: "CP01_TCR7",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '7',
    application_group: "CP01",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Processor Supplied Data", 5, 164, ANS),
    ],
};

/// CP01 TCR 8: supplemental data.
pub static CP01_TCR8: RecordSchema = RecordSchema {
    name: "CP01_TCR8",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '8',
    application_group: "CP01",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Transaction Type Indicator", 5, 1, AN),
        F::new("Recurring Transaction Indicator", 6, 1, AN),
        F::new("Payment Facilitator ID", 7, 11, AN),
        F::new("Sub-Merchant ID", 18, 15, AN),
        F::new("Reserved", 33, 136, AN),
    ],
};

/// CP01 TCR A: currency conversion.
pub static CP01_TCRA: RecordSchema = RecordSchema {
    name: "CP01_TCRA",
    record_type: "33",
    qualifier: "0",
    sequence_tag: 'A',
    application_group: "CP01",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Currency Conversion Rate", 5, 12, UN),
        F::new("Original Currency Amount", 17, 12, UN),
        F::new("Original Currency Code", 29, 3, AN),
        F::new("Converted Amount", 32, 12, UN),
        F::new("Converted Currency Code", 44, 3, AN),
        F::new("Reserved", 47, 122, AN),
    ],
};

/// CP01 TCR B: additional gateway data.
pub static CP01_TCRB: RecordSchema = RecordSchema {
    name: "CP01_TCRB",
    record_type: "33",
    qualifier: "0",
    sequence_tag: 'B',
    application_group: "CP01",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Gateway Reference ID", 5, 20, AN),
        F::new("Gateway Transaction Time", 25, 6, UN),
        F::new("Gateway Transaction Date", 31, 8, UN),
        F::new("Reserved", 39, 130, AN),
    ],
};

/// CP01 TCR 9 when no country-specific layout applies.
pub static CP01_TCR9_GENERIC: RecordSchema = RecordSchema {
    name: "CP01_TCR9_GENERIC",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '9',
    application_group: "CP01",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Intra-Country Data", 5, 164, ANS),
    ],
};

/// CP01 TCR 9 for shipments to Colombia.
pub static CP01_TCR9_COL: RecordSchema = RecordSchema {
    name: "CP01_TCR9_COL",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '9',
    application_group: "CP01",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("National Data Country Code", 5, 3, AN),
        F::new("Payment Method", 8, 2, AN),
        F::new("Taxable Amount", 10, 12, UN),
        F::new("Tax Amount", 22, 12, UN),
        F::new("Non-Taxable Amount", 34, 12, UN),
        F::new("Installment Count", 46, 3, N),
        F::new("Merchant Industry", 49, 4, AN),
        F::new("Discount Amount", 53, 12, UN),
        F::new("Invoice Number", 65, 20, AN),
        F::new("POS System Trace Audit Number", 85, 6, AN),
        F::new("Cashback Amount", 91, 12, UN),
        F::new("Reserved", 103, 66, AN),
    ],
};

/// CP01 TCR 9 for shipments to Japan.
pub static CP01_TCR9_JPN: RecordSchema = RecordSchema {
    name: "CP01_TCR9_JPN",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '9',
    application_group: "CP01",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("JCN Purchase Plan Code", 5, 2, AN),
        F::new("JCN Purchase Plan Amount", 7, 12, UN),
        F::new("JCN Purchase Plan Tax Amount", 19, 12, UN),
        F::new("Reserved", 31, 138, AN),
    ],
};

/// CP01 TCR 9 for shipments to Mexico.
pub static CP01_TCR9_MEX: RecordSchema = RecordSchema {
    name: "CP01_TCR9_MEX",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '9',
    application_group: "CP01",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Mexico Installment Indicator", 5, 1, AN),
        F::new("Mexico Installment Number", 6, 2, N),
        F::new("Mexico Coupon Code", 8, 4, AN),
        F::new("Mexico Cashback Amount", 12, 12, UN),
        F::new("Reserved", 24, 145, AN),
    ],
};

/// CP02 TCR 0: EMV data.
pub static CP02_TCR0: RecordSchema = RecordSchema {
    name: "CP02_TCR0",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '0',
    application_group: "CP02",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Destination Identifier", 5, 6, UN),
        F::new("Source Identifier", 11, 6, UN),
        F::new("TC 33 Application Code", 17, 4, AN),
        F::new("Message Identifier", 21, 15, AN),
        F::new("Application Interchange Profile", 36, 4, DX),
        F::new("Dedicated File Name", 40, 32, DX),
        F::new("Terminal Capabilities", 72, 6, DX),
        F::new("Terminal Country Code", 78, 4, DX),
        F::new("Transaction Currency Code", 82, 4, DX),
        F::new("Transaction Date", 86, 6, DX),
        F::new("Transaction Type", 92, 2, DX),
        F::new("Unpredictable Number", 94, 8, DX),
        F::new("Amount Authorized (Binary)", 102, 12, DX),
        F::new("Amount Other (Binary)", 114, 12, DX),
        F::new("Application Transaction Counter", 126, 4, DX),
        F::new("Cryptogram", 130, 16, DX),
        F::new("Cryptogram Information Data", 146, 2, DX),
        F::new("Issuer Application Data (part 1)", 148, 21, DX),
    ],
};

/// CP02 TCR 1: EMV data, continued.
pub static CP02_TCR1: RecordSchema = RecordSchema {
    name: "CP02_TCR1",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '1',
    application_group: "CP02",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Terminal Verification Results", 5, 10, DX),
        F::new("Transaction Status Information", 15, 4, DX),
        F::new("Cardholder Verification Method Results", 19, 6, DX),
        F::new("Issuer Authentication Data", 25, 32, DX),
        F::new("Cryptogram Version Number", 57, 2, DX),
        F::new("Terminal Type", 59, 2, DX),
        F::new("Terminal Capabilities (part 2)", 61, 2, DX),
        F::new("Dedicated File Name (part 2)", 63, 10, DX),
        F::new("Filler", 73, 96, AN),
    ],
};

/// CP03 TCR 0: lodging.
pub static CP03_TCR0: RecordSchema = RecordSchema {
    name: "CP03_TCR0",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '0',
    application_group: "CP03",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Destination Identifier", 5, 6, UN),
        F::new("Source Identifier", 11, 6, UN),
        F::new("TC 33 Application Code", 17, 4, AN),
        F::new("Message Identifier", 21, 15, AN),
        F::new("Lodging Property Type", 36, 2, AN),
        F::new("Lodging Chain Code", 38, 3, AN),
        F::new("Lodging Property ID", 41, 11, AN),
        F::new("Check-in Date", 52, 8, UN),
        F::new("Check-out Date", 60, 8, UN),
        F::new("Total Room Nights", 68, 3, UN),
        F::new("Room Rate", 71, 12, UN),
        F::new("Reserved", 83, 86, AN),
    ],
};

/// CP03 TCR 1: lodging summary.
pub static CP03_TCR1: RecordSchema = RecordSchema {
    name: "CP03_TCR1",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '1',
    application_group: "CP03",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Lodging Folio Number", 5, 20, AN),
        F::new("Lodging Check-in Date", 25, 6, UN),
        F::new("Lodging Check-out Date", 31, 6, UN),
        F::new("Lodging Duration", 37, 3, UN),
        F::new("Lodging Rate", 40, 12, UN),
        F::new("Lodging Guest Name", 52, 60, ANS),
        F::new("Reserved", 112, 57, AN),
    ],
};

/// CP03 TCR 4: lodging additional amounts.
pub static CP03_TCR4: RecordSchema = RecordSchema {
    name: "CP03_TCR4",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '4',
    application_group: "CP03",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Room Tax", 5, 12, UN),
        F::new("Misc Expenses", 17, 12, UN),
        F::new("Food & Beverage", 29, 12, UN),
        F::new("Phone Charges", 41, 12, UN),
        F::new("Incidental Charges", 53, 12, UN),
        F::new("Total Additional Amounts", 65, 12, UN),
        F::new("Reserved", 77, 92, AN),
    ],
};

/// CP04 TCR 0: passenger transport.
pub static CP04_TCR0: RecordSchema = RecordSchema {
    name: "CP04_TCR0",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '0',
    application_group: "CP04",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Destination Identifier", 5, 6, UN),
        F::new("Source Identifier", 11, 6, UN),
        F::new("TC 33 Application Code", 17, 4, AN),
        F::new("Message Identifier", 21, 15, AN),
        F::new("Airline Code", 36, 3, AN),
        F::new("Ticket Number", 39, 15, AN),
        F::new("Travel Agency Code", 54, 8, AN),
        F::new("Departure Date", 62, 8, UN),
        F::new("Reserved", 70, 99, AN),
    ],
};

/// CP04 TCR 1: passenger transport itinerary.
pub static CP04_TCR1: RecordSchema = RecordSchema {
    name: "CP04_TCR1",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '1',
    application_group: "CP04",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Passenger Name", 5, 30, ANS),
        F::new("Ticket Issue Date", 35, 8, UN),
        F::new("Fare Basis Code", 43, 8, AN),
        F::new("Origin Airport Code", 51, 3, AN),
        F::new("Destination Airport Code", 54, 3, AN),
        F::new("Flight Number", 57, 5, UN),
        F::new("Class of Service", 62, 1, AN),
        F::new("Travel Agency Name", 63, 25, ANS),
        F::new("Reserved", 88, 81, AN),
    ],
};

/// CP05 TCR 0: car rental.
pub static CP05_TCR0: RecordSchema = RecordSchema {
    name: "CP05_TCR0",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '0',
    application_group: "CP05",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Destination Identifier", 5, 6, UN),
        F::new("Source Identifier", 11, 6, UN),
        F::new("TC 33 Application Code", 17, 4, AN),
        F::new("Message Identifier", 21, 15, AN),
        F::new("Rental Agreement Number", 36, 20, AN),
        F::new("Rental Pick-up Date", 56, 8, UN),
        F::new("Rental Return Date", 64, 8, UN),
        F::new("Rental Duration", 72, 3, UN),
        F::new("Reserved", 75, 94, AN),
    ],
};

/// CP06 TCR 0: purchasing card invoice totals.
pub static CP06_TCR0: RecordSchema = RecordSchema {
    name: "CP06_TCR0",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '0',
    application_group: "CP06",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Destination Identifier", 5, 6, UN),
        F::new("Source Identifier", 11, 6, UN),
        F::new("TC 33 Application Code", 17, 4, AN),
        F::new("Message Identifier", 21, 15, AN),
        F::new("Invoice Date", 36, 8, UN),
        F::new("Invoice Number", 44, 20, AN),
        F::new("Purchase Order Number", 64, 20, AN),
        F::new("Total Discount Amount", 84, 12, UN),
        F::new("Total Tax Amount", 96, 12, UN),
        F::new("Shipping Cost", 108, 12, UN),
        F::new("Duty Amount", 120, 12, UN),
        F::new("Reserved", 132, 37, AN),
    ],
};

/// CP06 TCR 1: purchasing card line item detail.
pub static CP06_TCR1: RecordSchema = RecordSchema {
    name: "CP06_TCR1",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '1',
    application_group: "CP06",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Line Item Sequence Number", 5, 3, UN),
        F::new("Item Description", 8, 26, ANS),
        F::new("Quantity", 34, 12, UN),
        F::new("Unit Cost", 46, 12, UN),
        F::new("Item Amount", 58, 12, UN),
        F::new("Discount Amount Line Item", 70, 12, UN),
        F::new("Tax Amount Line Item", 82, 12, UN),
        F::new("Product Code", 94, 12, AN),
        F::new("Unit of Measure", 106, 3, AN),
        F::new("Tax Rate", 109, 6, UN),
        F::new("Debit/Credit Indicator Line Item", 115, 1, AN),
        F::new("Reserved", 116, 53, AN),
    ],
};

/// CP07 TCR 0: installment plan.
pub static CP07_TCR0: RecordSchema = RecordSchema {
    name: "CP07_TCR0",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '0',
    application_group: "CP07",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Destination Identifier", 5, 6, UN),
        F::new("Source Identifier", 11, 6, UN),
        F::new("TC 33 Application Code", 17, 4, AN),
        F::new("Message Identifier", 21, 15, AN),
        F::new("Installment Plan ID", 36, 2, AN),
        F::new("Number of Installments", 38, 3, UN),
        F::new("Reserved", 41, 128, AN),
    ],
};

/// CP07 TCR 8: original authorization reference.
pub static CP07_TCR8: RecordSchema = RecordSchema {
    name: "CP07_TCR8",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '8',
    application_group: "CP07",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Original Authorization Amount", 5, 12, UN),
        F::new("Original Authorization Currency Code", 17, 3, AN),
        F::new("Original Approval Code", 20, 6, AN),
        F::new("Original Transaction Date", 26, 4, UN),
        F::new("Original Transaction Time", 30, 6, UN),
        F::new("Original Message Identifier", 36, 15, AN),
        F::new("Reserved", 51, 118, AN),
    ],
};

/// CP08 TCR 0: discretionary data.
pub static CP08_TCR0: RecordSchema = RecordSchema {
    name: "CP08_TCR0",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '0',
    application_group: "CP08",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Destination Identifier", 5, 6, UN),
        F::new("Source Identifier", 11, 6, UN),
        F::new("TC 33 Application Code", 17, 4, AN),
        F::new("Message Identifier", 21, 15, AN),
        F::new("Discretionary Data", 36, 133, ANS),
    ],
};

/// CP09 TCR 0: cardholder verification.
pub static CP09_TCR0: RecordSchema = RecordSchema {
    name: "CP09_TCR0",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '0',
    application_group: "CP09",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Destination Identifier", 5, 6, UN),
        F::new("Source Identifier", 11, 6, UN),
        F::new("TC 33 Application Code", 17, 4, AN),
        F::new("Message Identifier", 21, 15, AN),
        F::new("Reserved", 36, 133, AN),
    ],
};

/// CP09 TCR 4: recipient name.
pub static CP09_TCR4: RecordSchema = RecordSchema {
    name: "CP09_TCR4",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '4',
    application_group: "CP09",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Recipient First Name", 5, 40, ANS),
        F::new("Recipient Last Name", 45, 40, ANS),
        F::new("Reserved", 85, 84, AN),
    ],
};

/// CP10 TCR 0: POS device information.
pub static CP10_TCR0: RecordSchema = RecordSchema {
    name: "CP10_TCR0",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '0',
    application_group: "CP10",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Destination Identifier", 5, 6, UN),
        F::new("Source Identifier", 11, 6, UN),
        F::new("TC 33 Application Code", 17, 4, AN),
        F::new("Message Identifier", 21, 15, AN),
        F::new("POS Device Type", 36, 2, AN),
        F::new("POS Device Capabilities", 38, 3, AN),
        F::new("Reserved", 41, 128, AN),
    ],
};

/// CP12 TCR 0: merchant category data.
pub static CP12_TCR0: RecordSchema = RecordSchema {
    name: "CP12_TCR0",
    record_type: "33",
    qualifier: "0",
    sequence_tag: '0',
    application_group: "CP12",
    fields: &[
        F::new("Transaction Code", 1, 2, UN),
        F::new("Transaction Code Qualifier", 3, 1, UN),
        F::new("Transaction Component Sequence Number", 4, 1, AN),
        F::new("Destination Identifier", 5, 6, UN),
        F::new("Source Identifier", 11, 6, UN),
        F::new("TC 33 Application Code", 17, 4, AN),
        F::new("Message Identifier", 21, 15, AN),
        F::new("Merchant Category Code (MCC)", 36, 4, AN),
        F::new("Merchant SIC Code", 40, 4, AN),
        F::new("Reserved", 44, 125, AN),
    ],
};
