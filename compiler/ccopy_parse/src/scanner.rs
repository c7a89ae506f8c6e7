//! Class declaration scanner.
//!
//! A single forward pass over the token stream. Namespaces, linkage blocks
//! and class bodies are descended into; everything else is stepped over
//! with the cursor's skipping helpers. Classes are recorded in pre-order,
//! so an enclosing class always precedes the classes nested in it.

use ccopy_ir::{ClassDescriptor, Field, Span, Token, TokenKind, TokenList, TypeDescriptor, TypeFlags};
use tracing::trace;

use crate::cursor::Cursor;
use crate::type_table::{is_builtin_scalar, unqualified, TypeTable};

/// Type named by a decl-specifier sequence.
#[derive(Clone, Debug, Default)]
struct DeclSpec {
    spelling: String,
    flags: TypeFlags,
    has_type: bool,
    is_builtin: bool,
    is_static: bool,
    is_friend: bool,
}

impl DeclSpec {
    fn push_word(&mut self, word: &str) {
        if !self.spelling.is_empty() {
            self.spelling.push(' ');
        }
        self.spelling.push_str(word);
    }

    fn set_type(&mut self, spelling: &str, flags: TypeFlags) {
        self.push_word(spelling);
        self.flags = flags;
        self.has_type = true;
    }
}

/// One declarator of a member, typedef or alias declaration.
#[derive(Debug, Default)]
struct Declarator {
    name: Option<(String, Span)>,
    pointer: bool,
    /// Pointer inside parentheses: `(*fp)(int)`, `(*rows)[4]`.
    nested_pointer: bool,
    reference: bool,
    array: bool,
    function: bool,
}

impl Declarator {
    /// The declared type, combining specifiers with declarator operators.
    ///
    /// Arrays and references of records are not records themselves.
    fn type_descriptor(&self, spec: &DeclSpec) -> TypeDescriptor {
        let mut spelling = spec.spelling.clone();
        let flags = if self.nested_pointer {
            spelling.push_str("(*)");
            TypeFlags::IS_POINTER
        } else if self.array {
            if self.pointer {
                spelling.push('*');
            }
            spelling.push_str("[]");
            TypeFlags::empty()
        } else if self.pointer {
            spelling.push('*');
            TypeFlags::IS_POINTER
        } else if self.reference {
            spelling.push('&');
            TypeFlags::empty()
        } else {
            spec.flags
        };
        TypeDescriptor::new(spelling, flags)
    }
}

pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    types: TypeTable,
    classes: Vec<ClassDescriptor>,
    /// Type parameter names of every enclosing template header.
    template_params: Vec<Vec<String>>,
    /// Members of the anonymous union or struct just scanned, waiting to be
    /// lifted into the enclosing class if no declarator names it.
    anonymous_members: Option<Vec<Field>>,
}

impl<'a> Scanner<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        Scanner {
            cursor: Cursor::new(tokens, source),
            types: TypeTable::new(),
            classes: Vec::new(),
            template_params: Vec::new(),
            anonymous_members: None,
        }
    }

    /// Scan the whole unit and return every named class and struct.
    pub fn scan(mut self) -> Vec<ClassDescriptor> {
        while !self.cursor.is_at_end() {
            self.scan_scope();
            // Unbalanced closing brace at file scope
            self.cursor.eat(TokenKind::RBrace);
        }
        self.classes
    }

    /// File scope, namespace body or linkage block, up to `}` or `Eof`.
    fn scan_scope(&mut self) {
        while !matches!(
            self.cursor.current_kind(),
            TokenKind::Eof | TokenKind::RBrace
        ) {
            let start = self.cursor.position();
            self.scan_scope_item();
            if self.cursor.position() == start {
                self.cursor.advance();
            }
        }
    }

    fn scan_scope_item(&mut self) {
        match self.cursor.current_kind() {
            TokenKind::Eof | TokenKind::RBrace => {}
            TokenKind::Semicolon => {
                self.cursor.advance();
            }
            TokenKind::Inline if self.cursor.peek_kind(1) == TokenKind::Namespace => {
                self.cursor.advance();
            }
            TokenKind::Namespace => self.scan_namespace(),
            TokenKind::Extern if self.cursor.peek_kind(1) == TokenKind::String => {
                self.scan_linkage_spec();
            }
            TokenKind::Template => {
                let params = self.scan_template_header();
                self.template_params.push(params);
                self.scan_scope_item();
                self.template_params.pop();
            }
            TokenKind::Typedef => self.scan_typedef(),
            TokenKind::Using => self.scan_using(),
            TokenKind::LBrace => self.scan_block(),
            _ => {
                self.parse_decl_specifiers();
                self.skip_declaration();
            }
        }
    }

    /// `template <typename T, class U, int N>`, returning `["T", "U"]`.
    fn scan_template_header(&mut self) -> Vec<String> {
        self.cursor.advance();
        if !self.cursor.check(TokenKind::Lt) {
            // explicit instantiation
            return Vec::new();
        }
        let start = self.cursor.position();
        self.cursor.skip_angle_group();
        let header = self.cursor.tokens_since(start);

        let mut params = Vec::new();
        let mut i = 0;
        while i < header.len() {
            if matches!(header[i].kind, TokenKind::Typename | TokenKind::Class) {
                i += 1;
                // parameter pack `...`
                while header.get(i).is_some_and(|t| t.kind == TokenKind::Other) {
                    i += 1;
                }
                let named = header.get(i).is_some_and(|t| t.kind == TokenKind::Ident)
                    && header.get(i + 1).is_some_and(|t| {
                        matches!(t.kind, TokenKind::Comma | TokenKind::Gt | TokenKind::Eq)
                    });
                if named {
                    params.push(self.cursor.text(header[i]).to_owned());
                }
            }
            i += 1;
        }
        trace!(params = ?params, "template header");
        params
    }

    /// Whether `name` is, or is nested in, a type parameter in scope.
    fn is_dependent(&self, name: &str) -> bool {
        if name.starts_with("::") {
            return false;
        }
        let head = name
            .split(|c| c == ':' || c == '<')
            .next()
            .unwrap_or(name)
            .trim();
        self.template_params.iter().flatten().any(|p| p == head)
    }

    /// Like [`Cursor::skip_declaration`], but brace groups are scanned for
    /// local class definitions instead of skipped.
    fn skip_declaration(&mut self) {
        loop {
            match self.cursor.current_kind() {
                TokenKind::Eof | TokenKind::RBrace => return,
                TokenKind::Semicolon => {
                    self.cursor.advance();
                    return;
                }
                TokenKind::LBrace => {
                    self.scan_block();
                    if !matches!(
                        self.cursor.current_kind(),
                        TokenKind::Semicolon | TokenKind::Comma
                    ) {
                        return;
                    }
                }
                TokenKind::LParen | TokenKind::LBracket => self.cursor.skip_balanced(),
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// A brace group outside any class body: function bodies, initializers.
    ///
    /// Only class, struct, union and enum specifiers are looked at.
    fn scan_block(&mut self) {
        self.cursor.advance();
        loop {
            let start = self.cursor.position();
            match self.cursor.current_kind() {
                TokenKind::Eof => return,
                TokenKind::RBrace => {
                    self.cursor.advance();
                    return;
                }
                TokenKind::LBrace => self.scan_block(),
                TokenKind::Class | TokenKind::Struct | TokenKind::Union | TokenKind::Enum => {
                    self.parse_decl_specifiers();
                }
                _ => {
                    self.cursor.advance();
                }
            }
            if self.cursor.position() == start {
                self.cursor.advance();
            }
        }
    }

    fn scan_namespace(&mut self) {
        self.cursor.advance();
        while matches!(
            self.cursor.current_kind(),
            TokenKind::Ident | TokenKind::ColonColon | TokenKind::Inline
        ) {
            self.cursor.advance();
        }
        if self.cursor.eat(TokenKind::LBrace) {
            self.scan_scope();
            self.cursor.eat(TokenKind::RBrace);
        } else {
            // namespace alias
            self.cursor.skip_declaration();
        }
    }

    /// `extern "C" { ... }` or `extern "C" decl;`
    fn scan_linkage_spec(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        if self.cursor.eat(TokenKind::LBrace) {
            self.scan_scope();
            self.cursor.eat(TokenKind::RBrace);
        }
    }

    /// `[[...]]` and `alignas(...)` before a class name.
    fn skip_attributes(&mut self) {
        loop {
            if self.cursor.check(TokenKind::LBracket)
                && self.cursor.peek_kind(1) == TokenKind::LBracket
            {
                self.cursor.skip_balanced();
            } else if self.cursor.check_word("alignas") {
                self.cursor.advance();
                self.cursor.skip_balanced();
            } else {
                return;
            }
        }
    }

    /// A possibly qualified name with template arguments, as written.
    fn parse_qualified_name(&mut self) -> String {
        let mut name = String::new();
        if self.cursor.eat(TokenKind::ColonColon) {
            name.push_str("::");
        }
        while self.cursor.check(TokenKind::Ident) {
            name.push_str(self.cursor.current_text());
            self.cursor.advance();
            if self.cursor.check(TokenKind::Lt) {
                let start = self.cursor.position();
                self.cursor.skip_angle_group();
                name.push_str(self.cursor.text_since(start));
            }
            if self.cursor.check(TokenKind::ColonColon)
                && matches!(
                    self.cursor.peek_kind(1),
                    TokenKind::Ident | TokenKind::Template
                )
            {
                self.cursor.advance();
                self.cursor.eat(TokenKind::Template);
                name.push_str("::");
            } else {
                break;
            }
        }
        name
    }

    fn parse_decl_specifiers(&mut self) -> DeclSpec {
        let mut spec = DeclSpec::default();
        self.anonymous_members = None;
        loop {
            match self.cursor.current_kind() {
                TokenKind::Static => {
                    spec.is_static = true;
                    self.cursor.advance();
                }
                TokenKind::Friend => {
                    spec.is_friend = true;
                    self.cursor.advance();
                }
                TokenKind::Const | TokenKind::Volatile => {
                    spec.push_word(self.cursor.current_text());
                    self.cursor.advance();
                }
                TokenKind::Mutable
                | TokenKind::Inline
                | TokenKind::Constexpr
                | TokenKind::Virtual
                | TokenKind::Explicit
                | TokenKind::Extern
                | TokenKind::Typename => {
                    self.cursor.advance();
                }
                TokenKind::Class | TokenKind::Struct | TokenKind::Union => {
                    if spec.has_type {
                        break;
                    }
                    let (spelling, flags) = self.scan_class_specifier(spec.is_friend);
                    spec.set_type(&spelling, flags);
                }
                TokenKind::Enum => {
                    if spec.has_type {
                        break;
                    }
                    let (spelling, flags) = self.scan_enum_specifier();
                    spec.set_type(&spelling, flags);
                }
                TokenKind::LBracket if self.cursor.peek_kind(1) == TokenKind::LBracket => {
                    self.cursor.skip_balanced();
                }
                TokenKind::Ident | TokenKind::ColonColon => {
                    let text = self.cursor.current_text();
                    if spec.has_type {
                        // `unsigned long long` keeps extending one builtin type
                        if spec.is_builtin && is_builtin_scalar(text) {
                            spec.push_word(text);
                            self.cursor.advance();
                            continue;
                        }
                        break;
                    }
                    let name = self.parse_qualified_name();
                    spec.is_builtin = is_builtin_scalar(&name);
                    let flags = if self.is_dependent(&name) {
                        TypeFlags::empty()
                    } else {
                        self.types.resolve(&name)
                    };
                    spec.set_type(&name, flags);
                }
                _ => break,
            }
        }
        spec
    }

    /// `class|struct|union [name] [final] [: bases] [{ body }]`
    ///
    /// Returns the named type's spelling and flags for any declarators that
    /// follow. Named class and struct definitions and forward declarations
    /// are recorded; unions and anonymous classes only feed the type table.
    fn scan_class_specifier(&mut self, is_friend: bool) -> (String, TypeFlags) {
        let key = self.cursor.advance();
        let flags = if key.kind == TokenKind::Union {
            TypeFlags::IS_UNION
        } else {
            TypeFlags::IS_RECORD
        };
        self.skip_attributes();

        let name = if matches!(
            self.cursor.current_kind(),
            TokenKind::Ident | TokenKind::ColonColon
        ) && !self.cursor.check_word("final")
        {
            Some(self.parse_qualified_name())
        } else {
            None
        };
        if self.cursor.check_word("final") {
            self.cursor.advance();
        }

        let simple = name.as_deref().map(|n| unqualified(n).to_owned());
        let spelling = simple
            .clone()
            .unwrap_or_else(|| self.cursor.text(key).to_owned());

        if !matches!(
            self.cursor.current_kind(),
            TokenKind::LBrace | TokenKind::Colon
        ) {
            // Elaborated type specifier or forward declaration
            if let Some(simple) = &simple {
                self.types.declare_if_absent(simple, flags);
                if self.cursor.check(TokenKind::Semicolon)
                    && key.kind != TokenKind::Union
                    && !is_friend
                {
                    let span = key.span.merge(self.cursor.current_span());
                    trace!(class = %simple, "forward declaration");
                    self.classes.push(ClassDescriptor::forward(simple.clone(), span));
                }
            }
            return (spelling, flags);
        }

        let bases = if self.cursor.eat(TokenKind::Colon) {
            self.parse_base_clause()
        } else {
            Vec::new()
        };
        if !self.cursor.check(TokenKind::LBrace) {
            return (spelling, flags);
        }
        if let Some(simple) = &simple {
            self.types.declare(simple, flags);
        }

        match simple {
            Some(simple) if key.kind != TokenKind::Union => {
                self.scan_class_definition(simple, bases, key.span);
            }
            Some(_) => self.cursor.skip_balanced(),
            None => self.scan_anonymous_body(key.kind == TokenKind::Union),
        }
        (spelling, flags)
    }

    /// Direct base specifiers up to the opening brace.
    fn parse_base_clause(&mut self) -> Vec<String> {
        let mut bases = Vec::new();
        loop {
            while matches!(
                self.cursor.current_kind(),
                TokenKind::Public | TokenKind::Protected | TokenKind::Private | TokenKind::Virtual
            ) {
                self.cursor.advance();
            }
            if !matches!(
                self.cursor.current_kind(),
                TokenKind::Ident | TokenKind::ColonColon
            ) {
                break;
            }
            bases.push(self.parse_qualified_name());
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        // Pack expansions and anything else we do not model
        while !matches!(
            self.cursor.current_kind(),
            TokenKind::LBrace | TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
        ) {
            self.cursor.advance();
        }
        bases
    }

    fn scan_class_definition(&mut self, name: String, bases: Vec<String>, start: Span) {
        let open = self.cursor.advance();
        let index = self.classes.len();
        // Placeholder keeps the enclosing class ahead of nested ones
        self.classes
            .push(ClassDescriptor::definition(name.clone(), open.span.end));

        let mut class = ClassDescriptor::definition(name, open.span.end);
        class.bases = bases;
        self.scan_class_body(&mut class);

        let close = self.cursor.current_span();
        class.is_complete_definition = self.cursor.eat(TokenKind::RBrace);
        class.insertion_offset = close.start;
        class.span = start.merge(close);

        trace!(
            class = %class.name,
            fields = class.fields.len(),
            bases = ?class.bases,
            user_copy_constructor = class.has_user_copy_constructor,
            "class definition"
        );
        self.classes[index] = class;
    }

    /// Members of `union { ... }` or `struct { ... }` without a name.
    ///
    /// Union members share storage, so they are marked as union-typed and
    /// stay together in one copy group.
    fn scan_anonymous_body(&mut self, is_union: bool) {
        self.cursor.advance();
        let mut members = ClassDescriptor::definition(String::new(), 0);
        self.scan_class_body(&mut members);
        self.cursor.eat(TokenKind::RBrace);

        let mut fields = members.fields;
        if is_union {
            for field in &mut fields {
                field.ty = TypeDescriptor::new(
                    field.ty.spelling(),
                    field.ty.flags() | TypeFlags::IS_UNION,
                );
            }
        }
        self.anonymous_members = Some(fields);
    }

    fn scan_class_body(&mut self, class: &mut ClassDescriptor) {
        while !matches!(
            self.cursor.current_kind(),
            TokenKind::Eof | TokenKind::RBrace
        ) {
            let start = self.cursor.position();
            self.scan_class_item(class);
            if self.cursor.position() == start {
                self.cursor.advance();
            }
        }
    }

    fn scan_class_item(&mut self, class: &mut ClassDescriptor) {
        match self.cursor.current_kind() {
            TokenKind::Eof | TokenKind::RBrace => {}
            TokenKind::Semicolon => {
                self.cursor.advance();
            }
            kind if kind.is_access_specifier() => {
                self.cursor.advance();
                self.cursor.eat(TokenKind::Colon);
            }
            TokenKind::Friend
            | TokenKind::StaticAssert
            | TokenKind::Tilde
            | TokenKind::Operator => self.skip_declaration(),
            TokenKind::Typedef => self.scan_typedef(),
            TokenKind::Using => self.scan_using(),
            TokenKind::Template => {
                let params = self.scan_template_header();
                self.template_params.push(params);
                self.scan_class_item(class);
                self.template_params.pop();
            }
            _ => {
                if self.at_constructor(&class.name) {
                    if self.scan_constructor(&class.name) {
                        class.has_user_copy_constructor = true;
                    }
                } else {
                    self.scan_member(class);
                }
            }
        }
    }

    fn at_constructor(&self, class_name: &str) -> bool {
        let mut n = 0;
        while matches!(
            self.cursor.peek_kind(n),
            TokenKind::Explicit | TokenKind::Inline | TokenKind::Constexpr
        ) {
            n += 1;
        }
        let name = self.cursor.peek(n);
        !class_name.is_empty()
            && name.kind == TokenKind::Ident
            && self.cursor.text(name) == class_name
            && self.cursor.peek_kind(n + 1) == TokenKind::LParen
    }

    /// Consume a constructor declaration or definition.
    ///
    /// Returns whether it is a copy constructor.
    fn scan_constructor(&mut self, class_name: &str) -> bool {
        while matches!(
            self.cursor.current_kind(),
            TokenKind::Explicit | TokenKind::Inline | TokenKind::Constexpr
        ) {
            self.cursor.advance();
        }
        self.cursor.advance();

        let open = self.cursor.position();
        self.cursor.skip_balanced();
        let group = self.cursor.tokens_since(open);
        let params = match group {
            [_, inner @ .., last] if last.kind == TokenKind::RParen => inner,
            [_, inner @ ..] => inner,
            [] => &[],
        };
        let is_copy = self.is_copy_parameter_list(params, class_name);

        self.skip_constructor_tail();
        is_copy
    }

    /// `(const X& other)`, `(X&)`, `(volatile X&, int = 0)`, ...
    fn is_copy_parameter_list(&self, params: &[Token], class_name: &str) -> bool {
        let groups = split_top_level(params);
        let Some((first, rest)) = groups.split_first() else {
            return false;
        };
        if !rest
            .iter()
            .all(|p| p.iter().any(|t| t.kind == TokenKind::Eq))
        {
            return false;
        }

        let mut i = 0;
        let at = |i: usize| first.get(i).map_or(TokenKind::Eof, |t| t.kind);
        while at(i).is_cv_qualifier() {
            i += 1;
        }
        // `X`, `ns::X`, `::X`, `Outer<T>::X<T>`
        if at(i) == TokenKind::ColonColon {
            i += 1;
        }
        #[allow(unused_assignments)]
        let mut last = None;
        loop {
            match first.get(i) {
                Some(t) if t.kind == TokenKind::Ident => {
                    last = Some(*t);
                    i += 1;
                }
                _ => return false,
            }
            if at(i) == TokenKind::Lt {
                i = skip_template_args(first, i);
            }
            if at(i) == TokenKind::ColonColon {
                i += 1;
            } else {
                break;
            }
        }
        if !last.is_some_and(|t| self.cursor.text(t) == class_name) {
            return false;
        }
        while at(i).is_cv_qualifier() {
            i += 1;
        }
        if at(i) != TokenKind::Amp {
            return false;
        }
        i += 1;
        if at(i) == TokenKind::Ident {
            i += 1;
        }
        i == first.len()
    }

    /// Everything after a constructor's parameter list.
    fn skip_constructor_tail(&mut self) {
        loop {
            let start = self.cursor.position();
            match self.cursor.current_kind() {
                TokenKind::Eof | TokenKind::RBrace => return,
                TokenKind::Semicolon => {
                    self.cursor.advance();
                    return;
                }
                TokenKind::LBrace => {
                    self.scan_block();
                    return;
                }
                TokenKind::Colon => {
                    self.cursor.advance();
                    self.skip_member_initializers();
                }
                TokenKind::Eq => {
                    // = default; = delete;
                    self.skip_declaration();
                    return;
                }
                TokenKind::LParen | TokenKind::LBracket => self.cursor.skip_balanced(),
                _ => {
                    self.cursor.advance();
                }
            }
            if self.cursor.position() == start {
                self.cursor.advance();
            }
        }
    }

    /// `a(x), b{y}, Base<T>(z)` up to the constructor body.
    fn skip_member_initializers(&mut self) {
        loop {
            self.parse_qualified_name();
            if !matches!(
                self.cursor.current_kind(),
                TokenKind::LParen | TokenKind::LBrace
            ) {
                return;
            }
            self.cursor.skip_balanced();
            if !self.cursor.eat(TokenKind::Comma) {
                return;
            }
        }
    }

    fn scan_member(&mut self, class: &mut ClassDescriptor) {
        let spec = self.parse_decl_specifiers();
        let anonymous = self.anonymous_members.take();
        if !spec.has_type {
            self.skip_declaration();
            return;
        }
        if let Some(fields) = anonymous {
            if self.cursor.eat(TokenKind::Semicolon) {
                trace!(class = %class.name, fields = fields.len(), "anonymous members");
                if !spec.is_static {
                    class.fields.extend(fields);
                }
                return;
            }
        }

        loop {
            let declarator = self.parse_declarator();
            if declarator.function {
                self.skip_declaration();
                return;
            }
            if let Some((name, span)) = &declarator.name {
                if !spec.is_static && !spec.is_friend {
                    let ty = declarator.type_descriptor(&spec);
                    trace!(class = %class.name, field = %name, ty = %ty, flags = ?ty.flags(), "field");
                    class.fields.push(Field::new(name.clone(), ty).with_span(*span));
                }
            }
            self.skip_initializer();
            match self.cursor.current_kind() {
                TokenKind::Comma => {
                    self.cursor.advance();
                }
                TokenKind::Semicolon => {
                    self.cursor.advance();
                    return;
                }
                _ => {
                    self.skip_declaration();
                    return;
                }
            }
        }
    }

    fn parse_declarator(&mut self) -> Declarator {
        let mut declarator = Declarator::default();
        self.parse_ptr_operators(&mut declarator, false);

        if self.cursor.check(TokenKind::LParen)
            && matches!(
                self.cursor.peek_kind(1),
                TokenKind::Star | TokenKind::Amp | TokenKind::AmpAmp
            )
        {
            // Parenthesized declarator: `(*fp)(int)`, `(&ref)[3]`
            self.cursor.advance();
            self.parse_ptr_operators(&mut declarator, true);
            if self.cursor.check(TokenKind::Ident) {
                declarator.name = Some(self.take_name());
            }
            while !matches!(
                self.cursor.current_kind(),
                TokenKind::RParen | TokenKind::Semicolon | TokenKind::RBrace | TokenKind::Eof
            ) {
                self.cursor.skip_balanced();
            }
            self.cursor.eat(TokenKind::RParen);
        } else if self.cursor.check(TokenKind::Ident) {
            declarator.name = Some(self.take_name());
        } else if self.cursor.check(TokenKind::Operator) {
            declarator.function = true;
            return declarator;
        }

        loop {
            match self.cursor.current_kind() {
                TokenKind::LBracket if self.cursor.peek_kind(1) == TokenKind::LBracket => {
                    // trailing attribute
                    self.cursor.skip_balanced();
                }
                TokenKind::LBracket => {
                    declarator.array = true;
                    self.cursor.skip_balanced();
                }
                TokenKind::LParen if declarator.nested_pointer => self.cursor.skip_balanced(),
                TokenKind::LParen if declarator.name.is_some() => {
                    declarator.function = true;
                    return declarator;
                }
                _ => return declarator,
            }
        }
    }

    fn parse_ptr_operators(&mut self, declarator: &mut Declarator, nested: bool) {
        loop {
            match self.cursor.current_kind() {
                TokenKind::Star => {
                    if nested {
                        declarator.nested_pointer = true;
                    } else {
                        declarator.pointer = true;
                    }
                    self.cursor.advance();
                }
                TokenKind::Amp | TokenKind::AmpAmp => {
                    declarator.reference = true;
                    self.cursor.advance();
                }
                TokenKind::Const | TokenKind::Volatile => {
                    self.cursor.advance();
                }
                _ => return,
            }
        }
    }

    fn take_name(&mut self) -> (String, Span) {
        let token = self.cursor.advance();
        (self.cursor.text(token).to_owned(), token.span)
    }

    /// Bit-field width, `= init` or `{init}` up to `,` or `;`.
    fn skip_initializer(&mut self) {
        loop {
            match self.cursor.current_kind() {
                TokenKind::Eof | TokenKind::RBrace | TokenKind::Semicolon | TokenKind::Comma => {
                    return;
                }
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => {
                    self.cursor.skip_balanced();
                }
                _ => {
                    self.cursor.advance();
                }
            }
        }
    }

    /// `enum [class] [name] [: underlying] [{ enumerators }]`
    fn scan_enum_specifier(&mut self) -> (String, TypeFlags) {
        let key = self.cursor.advance();
        if matches!(
            self.cursor.current_kind(),
            TokenKind::Class | TokenKind::Struct
        ) {
            self.cursor.advance();
        }
        self.skip_attributes();
        let name = if matches!(
            self.cursor.current_kind(),
            TokenKind::Ident | TokenKind::ColonColon
        ) {
            Some(self.parse_qualified_name())
        } else {
            None
        };
        if self.cursor.eat(TokenKind::Colon) {
            while matches!(
                self.cursor.current_kind(),
                TokenKind::Ident | TokenKind::ColonColon
            ) {
                self.cursor.advance();
            }
        }
        if self.cursor.check(TokenKind::LBrace) {
            self.cursor.skip_balanced();
        }

        match name {
            Some(name) => {
                let simple = unqualified(&name).to_owned();
                self.types.declare(&simple, TypeFlags::IS_ENUM);
                (simple, TypeFlags::IS_ENUM)
            }
            None => (self.cursor.text(key).to_owned(), TypeFlags::IS_ENUM),
        }
    }

    /// `typedef spec declarator, declarator;`
    fn scan_typedef(&mut self) {
        self.cursor.advance();
        let spec = self.parse_decl_specifiers();
        loop {
            let declarator = self.parse_declarator();
            if let Some((name, _)) = &declarator.name {
                let flags = declarator.type_descriptor(&spec).flags();
                self.types.declare(name, flags);
            }
            self.skip_initializer();
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.cursor.skip_declaration();
    }

    /// `using Name = type;`; other using-declarations are skipped.
    fn scan_using(&mut self) {
        self.cursor.advance();
        if self.cursor.check(TokenKind::Ident) && self.cursor.peek_kind(1) == TokenKind::Eq {
            let name = self.cursor.current_text().to_owned();
            self.cursor.advance();
            self.cursor.advance();
            let spec = self.parse_decl_specifiers();
            let declarator = self.parse_declarator();
            self.types
                .declare(&name, declarator.type_descriptor(&spec).flags());
        }
        self.cursor.skip_declaration();
    }
}

/// Index just past the `<...>` group starting at `start`.
fn skip_template_args(tokens: &[Token], start: usize) -> usize {
    let mut depth = 0usize;
    let mut i = start;
    while i < tokens.len() {
        match tokens[i].kind {
            TokenKind::Lt => depth += 1,
            TokenKind::Gt => depth = depth.saturating_sub(1),
            _ => {}
        }
        i += 1;
        if depth == 0 {
            break;
        }
    }
    i
}

/// Split a token run at commas outside any brackets.
fn split_top_level(tokens: &[Token]) -> Vec<&[Token]> {
    if tokens.is_empty() {
        return Vec::new();
    }
    let mut groups = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, token) in tokens.iter().enumerate() {
        match token.kind {
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace | TokenKind::Lt => {
                depth += 1;
            }
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace | TokenKind::Gt => {
                depth = depth.saturating_sub(1);
            }
            TokenKind::Comma if depth == 0 => {
                groups.push(&tokens[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    groups.push(&tokens[start..]);
    groups
}
