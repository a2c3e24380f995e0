//! The upload form served at `/`.

/// HTML page with the name field and the workbook upload input.
pub const UPLOAD_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Upload Excel File</title>
    <style>
        body { font-family: Arial, sans-serif; display: flex; justify-content: center;
               align-items: center; height: 100vh; background-color: #f4f4f4; margin: 0; }
        .container { background: white; padding: 2rem; border-radius: 10px;
                     box-shadow: 0 4px 10px rgba(0, 0, 0, 0.1); text-align: center;
                     max-width: 400px; width: 100%; }
        input[type="text"], input[type="file"] { width: 100%; padding: 10px; margin: 10px 0;
                     border: 1px solid #ccc; border-radius: 5px; box-sizing: border-box; }
        button { background-color: #007BFF; color: white; border: none; padding: 10px 15px;
                 border-radius: 5px; cursor: pointer; width: 100%; font-size: 16px; }
        button:hover { background-color: #0056b3; }
    </style>
</head>
<body>
    <div class="container">
        <h1>Shift Calendar</h1>
        <p>Upload an Excel file containing your work shifts and generate an ICS calendar file.</p>
        <h2>Upload Your File</h2>
        <form method="POST" enctype="multipart/form-data">
            <label for="name_to_search">Name:</label>
            <input type="text" name="name_to_search" id="name_to_search" required>
            <input type="file" name="excel_file" accept=".xlsx" required>
            <button type="submit">Upload</button>
        </form>
    </div>
</body>
</html>
"#;
