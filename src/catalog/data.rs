//! Built-in Imaris module and product table.
//!
//! Rows are `(id, display name, product, description)`. The id is the value
//! name Imaris writes into the per-user license namespace.

pub(super) const MODULES: &[(&str, &str, &str, &str)] = &[
    ("ImarisBase", "Imaris Base", "Imaris", ""),
    ("ImarisSurpass", "Imaris Surpass", "Imaris", ""),
    ("ImarisSurpassBase", "Imaris Surpass Base", "Imaris", ""),
    ("ImarisTime", "Imaris Time", "Imaris", ""),
    ("ImarisTopography", "ImarisTopography", "Imaris", ""),
    ("ImarisCellsViewer", "Imaris Cell", "Imaris Cell", ""),
    ("ImarisColoc", "Imaris Coloc", "Imaris Coloc", ""),
    ("ImarisFilament", "Filament Tracer", "Filament Tracer", ""),
    ("ImarisInPress", "Imaris InPress", "Imaris Vantage", ""),
    ("ImarisIPSS", "Imaris XT", "Imaris XT", ""),
    ("ImarisManualSurface", "Imaris Manual Surface", "Imaris Measurement Pro", ""),
    ("ImarisMeasurementPoint", "Imaris Measurement Point", "Imaris Measurement Pro", ""),
    (
        "ImarisReaderBiorad",
        "Bio-Rad MRC (series)",
        "File Reader",
        "Supported extensions: *.pic",
    ),
    (
        "ImarisReaderDeltaVision",
        "Applied Precision DeltaVision",
        "File Reader",
        "Supported extensions: *.r3d, *.dv",
    ),
    (
        "ImarisReaderGatan",
        "Gatan DigitalMicrograph (series)",
        "File Reader",
        "Supported extensions: *.dm3",
    ),
    (
        "ImarisReaderHamamatsu",
        "Hamamatsu Compix SimplePCI",
        "File Reader",
        "Supported extensions: *.cxd",
    ),
    (
        "ImarisReaderIII",
        "Imaris version 3.0 reader",
        "File Reader",
        "Supported extensions: *.ims",
    ),
    (
        "ImarisReaderIMOD",
        "IMOD MRC",
        "File Reader",
        "Supported extensions: *.mrc, *.st, *.rec",
    ),
    ("ImarisReaderIPLab", "IPLab", "File Reader", ""),
    (
        "ImarisReaderLeica",
        "Leica",
        "File Reader",
        "Supported extensions: *.lif, *.tif, *.tiff, *.inf, *.info, *.lei, *.raw",
    ),
    (
        "ImarisReaderMicroManager",
        "Micro-Manager Image5D",
        "File Reader",
        "Supported extensions: *.tif, *.tiff, *.txt",
    ),
    (
        "ImarisReaderNikon",
        "Nikon Image Cytometry Standard and ND2",
        "File Reader",
        "Supported extensions: *.ics, *.ids, *.nd2",
    ),
    (
        "ImarisReaderOlympus",
        "Olympus CellR, Fluoview OIB, OIF, TIFF",
        "File Reader",
        "Supported extensions: *.tif, *.tiff, *.oib, *.oif",
    ),
    (
        "ImarisReaderOME",
        "Open Microscopy Environment TIFF and XML",
        "File Reader",
        "Supported extensions: *.tif, *.tiff, *.ome",
    ),
    (
        "ImarisReaderPerkinElmerInc",
        "Perkin Elmer Improvision Openlab LIFF (series), RAW and UltraView",
        "File Reader",
        "Supported extensions: *.liff, *.raw, *.tim, *.zpo",
    ),
    (
        "ImarisReaderPrairie",
        "Prairie Technologies View",
        "File Reader",
        "Supported extensions: *.xml, *.cfg, *.tif, *.tiff",
    ),
    (
        "ImarisReaderTILL",
        "TILL Photonics TILLvisION",
        "File Reader",
        "Supported extensions: *.rbinf",
    ),
    ("ImarisReaderUniversalImaging", "Universal Imaging", "File Reader", ""),
    (
        "ImarisReaderZeiss",
        "Zeiss AxioVision, CZI, LSM 310, 410, 510, 710",
        "File Reader",
        "Supported extensions: *.zvi, *.czi, *.lsm, *.tif, *.tiff",
    ),
    ("ImarisSceneViewer", "Imaris Scene Viewer", "Imaris Scene Viewer", ""),
    ("ImarisStatistics", "Imaris Statistics", "Imaris Measurement Pro", ""),
    ("ImarisTrack", "Imaris Track", "Imaris Track", ""),
    ("ImarisVantage", "Imaris Vantage", "Imaris Vantage", ""),
];

/// Product descriptions, including products that currently ship no module.
pub(super) const PRODUCTS: &[(&str, &str)] = &[
    ("Imaris", "3D and 4D Real-Time Interactive Image Visualization."),
    ("Imaris Measurement Pro", "The Analysis and Quantification Engine."),
    ("Imaris Track", "Discover the Meaning of Motion."),
    ("Imaris Coloc", "Isolate, Visualize and Quantify Colocalized Regions."),
    (
        "Imaris Cell",
        "Analysis and Visualization of intra/inter Cellular Relationships.",
    ),
    ("Filament Tracer", "Analysis and Visualization of Filamentous Structures."),
    ("Imaris Vantage", "Data Plotting (2D to 5D), Interpretation and Mining."),
    (
        "Imaris XT",
        "Access to the Open Source Community and XTensions. Freedom to customize.",
    ),
    ("Imaris Scene Viewer", "Viewer for Imaris Scenes."),
    ("Imaris Batch", "Automated Image Processing."),
    ("AutoAligner", "Image Alignment Made Easy."),
    ("AutoQuant", "Advanced and Fully Featured Image Deconvolution."),
    ("File Reader", "Proprietary File Readers."),
];
