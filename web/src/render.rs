//! Server-side HTML for the task list UI.
//!
//! Two entry points: [`page`] renders the full document and [`task_list`]
//! renders just the list fragment. User-supplied names are HTML-escaped.
//! DELETE and PUT cannot be issued from plain HTML forms, so the page
//! carries a small script that sends them via `fetch` and reloads.

use std::fmt::Write as _;

use tareas_core::TaskDto;

/// Full page: create form, optional pre-filled edit form, task list.
pub fn page(tasks: &[TaskDto], editing: Option<&TaskDto>) -> String {
    let mut html = String::with_capacity(1024);
    html.push_str(
        "<!DOCTYPE html>\n\
         <html lang=\"es\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <title>Tareas</title>\n\
         </head>\n\
         <body>\n\
         <h1>Lista de tareas</h1>\n\
         <form method=\"post\" action=\"/crear_tarea\">\n\
         <input type=\"text\" name=\"nombre\" placeholder=\"Nueva tarea\" required>\n\
         <button type=\"submit\">Crear</button>\n\
         </form>\n",
    );

    if let Some(task) = editing {
        let _ = write!(
            html,
            "<form id=\"editar\" data-id=\"{}\">\n\
             <input type=\"text\" name=\"nombre\" value=\"{}\" required>\n\
             <button type=\"submit\">Guardar</button>\n\
             </form>\n",
            task.id,
            escape(&task.nombre),
        );
    }

    html.push_str(&task_list(tasks));
    html.push_str(
        "<button id=\"borrar-todas\">Eliminar todas</button>\n\
         <script>\n\
         async function send(url, options) {\n\
           await fetch(url, options);\n\
           window.location = '/';\n\
         }\n\
         document.querySelectorAll('button[data-delete]').forEach(b =>\n\
           b.addEventListener('click', () => send(b.dataset.delete, { method: 'DELETE' })));\n\
         document.getElementById('borrar-todas').addEventListener('click', () =>\n\
           send('/eliminar_todas_las_tareas', { method: 'DELETE' }));\n\
         const editar = document.getElementById('editar');\n\
         if (editar) editar.addEventListener('submit', e => {\n\
           e.preventDefault();\n\
           send('/actualizar_tarea/' + editar.dataset.id, {\n\
             method: 'PUT',\n\
             headers: { 'Content-Type': 'application/x-www-form-urlencoded' },\n\
             body: 'nombre=' + encodeURIComponent(editar.elements.nombre.value),\n\
           });\n\
         });\n\
         </script>\n\
         </body>\n\
         </html>\n",
    );
    html
}

/// List fragment only.
pub fn task_list(tasks: &[TaskDto]) -> String {
    if tasks.is_empty() {
        return "<p>No hay tareas.</p>\n".to_string();
    }

    let mut html = String::from("<ul>\n");
    for task in tasks {
        let mark = if task.completa { "[x]" } else { "[ ]" };
        let _ = write!(
            html,
            "<li>\n\
             <form method=\"post\" action=\"/toggle_tarea/{id}\" style=\"display:inline\">\n\
             <button type=\"submit\">{mark}</button>\n\
             </form>\n\
             <span>{name}</span>\n\
             <a href=\"/editar_tarea/{id}\">Editar</a>\n\
             <button data-delete=\"/eliminar_tarea/{id}\">Eliminar</button>\n\
             </li>\n",
            id = task.id,
            mark = mark,
            name = escape(&task.nombre),
        );
    }
    html.push_str("</ul>\n");
    html
}

/// Minimal HTML escaping for text and attribute positions.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
