//! HTML templates for the dashboard.
//!
//! Uses a simple template approach with Tailwind CSS.

/// Escape a string for embedding in HTML text or attribute values.
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Base HTML layout wrapper.
pub fn layout(title: &str, content: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title} - Marlin</title>
    <script src="https://cdn.tailwindcss.com"></script>
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css">
    <style>
        .hide {{ display: none; }}
    </style>
</head>
<body class="bg-gray-50 min-h-screen">
    {NAV}

    <main class="p-6 lg:p-8">
        <div class="max-w-6xl mx-auto">
            {content}
        </div>
    </main>
</body>
</html>"##,
        title = title,
        NAV = nav_template(),
        content = content,
    )
}

fn nav_template() -> &'static str {
    r##"<nav class="bg-indigo-700 text-white px-4 py-3 sticky top-0 z-50 shadow-lg">
        <div class="flex items-center gap-6 max-w-6xl mx-auto">
            <a href="/" class="flex items-center gap-2 font-semibold">
                <i class="fas fa-database"></i>
                <span>Marlin</span>
            </a>
            <a href="/database/routines" class="text-sm hover:underline">Routines</a>
            <a href="/database/triggers" class="text-sm hover:underline">Triggers</a>
            <a href="/database/events" class="text-sm hover:underline">Events</a>
        </div>
    </nav>"##
}

/// Link to the MySQL reference manual chapter for a list view.
pub fn mysql_docs_link(chapter: &str) -> String {
    format!(
        r##"<a class="doc-link text-sm text-indigo-600 hover:underline" target="_blank" rel="noopener" href="https://dev.mysql.com/doc/refman/8.4/en/{chapter}.html"><i class="fas fa-circle-question"></i></a>"##
    )
}

/// "Check all" link plus the bulk Export/Drop submit buttons shown under
/// a non-empty list.
pub fn select_all_control(form_id: &str) -> String {
    format!(
        r##"<div class="with-selected flex items-center gap-3 mt-3">
            <a href="#" class="select-all text-sm text-indigo-600 hover:underline" data-form="{form_id}">Check all</a>
            <button type="submit" name="submit_mult" value="export"
                    class="bg-gray-200 hover:bg-gray-300 text-gray-700 px-4 py-2 rounded-lg font-medium transition-colors">
                <i class="fas fa-file-export"></i> Export selected
            </button>
            <button type="submit" name="submit_mult" value="drop"
                    class="bg-red-600 hover:bg-red-700 text-white px-4 py-2 rounded-lg font-medium transition-colors">
                <i class="fas fa-trash"></i> Drop selected
            </button>
        </div>"##
    )
}
